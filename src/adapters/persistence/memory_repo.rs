//! In-process FAQ store. Implements FaqStorePort and FaqWriterPort.
//!
//! Selected with `storage = "memory"`; contents are lost on restart.

use crate::domain::{DomainError, FaqEntry, NewFaqEntry};
use crate::ports::{FaqStorePort, FaqWriterPort};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryData {
    entries: Vec<FaqEntry>,
    next_id: i64,
}

impl MemoryData {
    fn push_all(&mut self, entries: &[NewFaqEntry]) {
        for e in entries {
            self.next_id += 1;
            self.entries.push(FaqEntry {
                id: self.next_id,
                question: e.question.clone(),
                answer: e.answer.clone(),
            });
        }
    }
}

/// Vec-backed store. Ids are assigned sequentially starting at 1.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    data: RwLock<MemoryData>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-filled with `entries`, in order.
    pub fn with_entries(entries: impl IntoIterator<Item = NewFaqEntry>) -> Self {
        let entries: Vec<NewFaqEntry> = entries.into_iter().collect();
        let mut data = MemoryData::default();
        data.push_all(&entries);
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait::async_trait]
impl FaqStorePort for MemoryRepo {
    async fn fetch_all(&self) -> Result<Vec<FaqEntry>, DomainError> {
        Ok(self.data.read().await.entries.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.data.read().await.entries.len())
    }
}

#[async_trait::async_trait]
impl FaqWriterPort for MemoryRepo {
    async fn insert_entries(&self, entries: &[NewFaqEntry]) -> Result<usize, DomainError> {
        let mut data = self.data.write().await;
        data.push_all(entries);
        Ok(entries.len())
    }

    async fn replace_entries(
        &self,
        entries: &[NewFaqEntry],
    ) -> Result<(usize, usize), DomainError> {
        // single write lock: readers see either the old or the new corpus
        let mut data = self.data.write().await;
        let removed = data.entries.len();
        data.entries.clear();
        data.push_all(entries);
        Ok((removed, entries.len()))
    }
}
