//! Seed file loader. Reads FAQ entries from JSON or CSV for out-of-band import.
//!
//! - `.json`: array of `{ "question": ..., "answer": ... }`
//! - `.csv`: header row `question,answer`, comma-delimited, standard quoting

use crate::domain::{DomainError, NewFaqEntry};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Load seed entries from `path`. Format is chosen by file extension.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<NewFaqEntry>, DomainError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Seed(format!("read {}: {}", path.display(), e)))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let entries = match ext.as_str() {
        "json" => parse_json(&content)?,
        "csv" => parse_csv(&content)?,
        other => {
            return Err(DomainError::Seed(format!(
                "unsupported seed file extension '{}' (expected .json or .csv)",
                other
            )));
        }
    };

    info!(path = %path.display(), count = entries.len(), "loaded seed file");
    Ok(entries)
}

fn parse_json(content: &str) -> Result<Vec<NewFaqEntry>, DomainError> {
    serde_json::from_str(content).map_err(|e| DomainError::Seed(format!("invalid JSON: {}", e)))
}

fn parse_csv(content: &str) -> Result<Vec<NewFaqEntry>, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_reader(content.as_bytes());
    reader
        .deserialize::<NewFaqEntry>()
        .map(|r| r.map_err(|e| DomainError::Seed(format!("invalid CSV: {}", e))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_json_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(
            &path,
            r#"[{"question": "What is a balanced diet?", "answer": "A1"},
                {"question": "How can I lose weight?", "answer": "A2"}]"#,
        )
        .unwrap();

        let entries = load_seed_file(&path).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], NewFaqEntry::new("How can I lose weight?", "A2"));
    }

    #[tokio::test]
    async fn test_load_csv_seed_with_quoted_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.CSV");
        std::fs::write(
            &path,
            "question,answer\n\"Fruits, vegetables?\",\"Yes, both.\"\nHydration tips,Drink water\n",
        )
        .unwrap();

        let entries = load_seed_file(&path).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "Fruits, vegetables?");
        assert_eq!(entries[0].answer, "Yes, both.");
        assert_eq!(entries[1].answer, "Drink water");
    }

    #[tokio::test]
    async fn test_unsupported_extension_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.txt");
        std::fs::write(&path, "question,answer\n").unwrap();
        assert!(matches!(
            load_seed_file(&path).await,
            Err(DomainError::Seed(_))
        ));

        let missing = dir.path().join("nope.json");
        assert!(matches!(
            load_seed_file(&missing).await,
            Err(DomainError::Seed(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_seed_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faq.json");
        std::fs::write(&path, r#"[{"question": "only question"}]"#).unwrap();
        assert!(matches!(
            load_seed_file(&path).await,
            Err(DomainError::Seed(_))
        ));
    }
}
