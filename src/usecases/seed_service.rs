//! Out-of-band FAQ import. Runs at startup when a seed file is configured.
//!
//! Blank entries are skipped. With `replace`, the old corpus is swapped for the
//! new one in a single writer call, so a failed import keeps the old entries.
//! Without `replace`, a non-empty store is left untouched so restarts do not
//! duplicate the corpus.

use crate::domain::{DomainError, NewFaqEntry};
use crate::ports::{FaqStorePort, FaqWriterPort};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a single import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Entries dropped for a blank question or answer.
    pub skipped: usize,
    pub cleared: usize,
    /// Import not applied because the store already had entries.
    pub already_populated: bool,
}

pub struct SeedService {
    store: Arc<dyn FaqStorePort>,
    writer: Arc<dyn FaqWriterPort>,
}

impl SeedService {
    pub fn new(store: Arc<dyn FaqStorePort>, writer: Arc<dyn FaqWriterPort>) -> Self {
        Self { store, writer }
    }

    /// Import `entries`. With `replace`, existing entries are swapped out atomically.
    pub async fn import(
        &self,
        entries: Vec<NewFaqEntry>,
        replace: bool,
    ) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        if !replace {
            let existing = self.store.count().await?;
            if existing > 0 {
                info!(existing, "FAQ store already populated, skipping seed import");
                report.already_populated = true;
                return Ok(report);
            }
        }

        let (valid, blank): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| !e.is_blank());
        for e in &blank {
            warn!(question = %e.question, "skipping seed entry with blank question or answer");
        }
        report.skipped = blank.len();

        if replace {
            let (cleared, inserted) = self.writer.replace_entries(&valid).await?;
            report.cleared = cleared;
            report.inserted = inserted;
        } else {
            report.inserted = self.writer.insert_entries(&valid).await?;
        }

        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            cleared = report.cleared,
            "seed import finished"
        );
        Ok(report)
    }
}
