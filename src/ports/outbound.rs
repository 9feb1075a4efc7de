//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, FaqEntry, NewFaqEntry};

/// Read side of the FAQ store.
#[async_trait::async_trait]
pub trait FaqStorePort: Send + Sync {
    /// Fetch every entry, unfiltered, in storage order (ascending id).
    async fn fetch_all(&self) -> Result<Vec<FaqEntry>, DomainError>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Write side of the FAQ store. Only used by out-of-band seeding.
#[async_trait::async_trait]
pub trait FaqWriterPort: Send + Sync {
    /// Insert entries in order. Returns how many were written.
    async fn insert_entries(&self, entries: &[NewFaqEntry]) -> Result<usize, DomainError>;

    /// Remove every entry and insert `entries` as one atomic step. On error the
    /// previous contents are kept. Returns `(removed, inserted)`.
    async fn replace_entries(
        &self,
        entries: &[NewFaqEntry],
    ) -> Result<(usize, usize), DomainError>;
}
