//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Seed import failed: {0}")]
    Seed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
