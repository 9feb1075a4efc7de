//! SQLite-backed FAQ store via libsql. Implements FaqStorePort and FaqWriterPort.
//!
//! Single `faq_entries` table; `fetch_all` is a full scan ordered by id so the
//! matcher sees entries in insertion order. Database file: <data_dir>/faq.db

use crate::domain::{DomainError, FaqEntry, NewFaqEntry};
use crate::ports::{FaqStorePort, FaqWriterPort};
use libsql::{Database, params};
use std::path::{Path, PathBuf};
use tracing::info;

const FAQ_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS faq_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    created_at INTEGER NOT NULL
)"#;

/// SQLite repository. One database file (faq.db) in the given base directory.
pub struct SqliteRepo {
    db: Database,
    db_path: PathBuf,
}

impl SqliteRepo {
    /// Connect to (or create) the SQLite database and ensure the schema exists.
    /// Call this once at startup; the returned repo is safe to share via Arc.
    pub async fn connect(base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let base = base_dir.as_ref();
        std::fs::create_dir_all(base).map_err(|e| DomainError::Repo(e.to_string()))?;
        let db_path = base.join("faq.db");
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let conn = db.connect().map_err(|e| DomainError::Repo(e.to_string()))?;

        // PRAGMA returns a row (new value); use query and consume rows (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Repo(format!("WAL pragma failed: {}", e)))?;
        while wal_rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
            .is_some()
        {}

        conn.execute(FAQ_TABLE, ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;

        info!(path = %db_path.display(), "SQLite FAQ store connected");

        Ok(Self { db, db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<libsql::Connection, DomainError> {
        self.db
            .connect()
            .map_err(|e| DomainError::Repo(e.to_string()))
    }

    async fn insert_in(
        tx: &libsql::Transaction,
        entries: &[NewFaqEntry],
    ) -> Result<(), DomainError> {
        let now = chrono::Utc::now().timestamp();
        for e in entries {
            tx.execute(
                "INSERT INTO faq_entries (question, answer, created_at) VALUES (?1, ?2, ?3)",
                params![e.question.as_str(), e.answer.as_str(), now],
            )
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FaqStorePort for SqliteRepo {
    async fn fetch_all(&self) -> Result<Vec<FaqEntry>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, question, answer FROM faq_entries ORDER BY id ASC",
                (),
            )
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let mut entries = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            let id: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
            let question: String = row.get(1).map_err(|e| DomainError::Repo(e.to_string()))?;
            let answer: String = row.get(2).map_err(|e| DomainError::Repo(e.to_string()))?;
            entries.push(FaqEntry {
                id,
                question,
                answer,
            });
        }
        Ok(entries)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query("SELECT COUNT(*) FROM faq_entries", ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        match rows
            .next()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?
        {
            Some(row) => {
                let n: i64 = row.get(0).map_err(|e| DomainError::Repo(e.to_string()))?;
                Ok(n as usize)
            }
            None => Ok(0),
        }
    }
}

#[async_trait::async_trait]
impl FaqWriterPort for SqliteRepo {
    async fn insert_entries(&self, entries: &[NewFaqEntry]) -> Result<usize, DomainError> {
        if entries.is_empty() {
            return Ok(0);
        }
        let conn = self.conn()?;
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        Self::insert_in(&tx, entries).await?;
        tx.commit()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        info!(count = entries.len(), "inserted FAQ entries");
        Ok(entries.len())
    }

    async fn replace_entries(
        &self,
        entries: &[NewFaqEntry],
    ) -> Result<(usize, usize), DomainError> {
        let conn = self.conn()?;
        // Dropping an uncommitted transaction rolls it back, so an insert
        // failure leaves the previous rows in place.
        let tx = conn
            .transaction()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        let removed = tx
            .execute("DELETE FROM faq_entries", ())
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        Self::insert_in(&tx, entries).await?;
        tx.commit()
            .await
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        info!(removed, inserted = entries.len(), "replaced FAQ entries");
        Ok((removed as usize, entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_fetch_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        assert!(repo.db_path().ends_with("faq.db"));

        let inserted = repo
            .insert_entries(&[
                NewFaqEntry::new("What is a balanced diet?", "A1"),
                NewFaqEntry::new("How can I lose weight?", "A2"),
            ])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let entries = repo.fetch_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "A1");
        assert_eq!(entries[1].answer, "A2");
        assert!(entries[0].id < entries[1].id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_replace_entries_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = SqliteRepo::connect(dir.path()).await.unwrap();
            repo.insert_entries(&[NewFaqEntry::new("Q", "A")])
                .await
                .unwrap();
        }
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        let (removed, inserted) = repo
            .replace_entries(&[NewFaqEntry::new("Q2", "A2"), NewFaqEntry::new("Q3", "A3")])
            .await
            .unwrap();
        assert_eq!((removed, inserted), (1, 2));

        let entries = repo.fetch_all().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "A2");
        assert_eq!(entries[1].answer, "A3");
    }

    #[tokio::test]
    async fn test_replace_entries_with_empty_list_empties_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        repo.insert_entries(&[NewFaqEntry::new("Q", "A")])
            .await
            .unwrap();
        assert_eq!(repo.replace_entries(&[]).await.unwrap(), (1, 0));
        assert!(repo.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_empty_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepo::connect(dir.path()).await.unwrap();
        assert_eq!(repo.insert_entries(&[]).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
