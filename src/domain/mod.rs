//! Core domain layer. No external I/O dependencies.
//!
//! Entities, keyword extraction and scoring rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod keywords;
pub mod matcher;

pub use entities::{ChatReply, FaqEntry, NewFaqEntry};
pub use errors::DomainError;
pub use keywords::{extract_keywords, normalize};
pub use matcher::{Match, best_match, match_score};
