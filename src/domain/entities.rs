//! Domain entities. Pure data structures for the core business.
//!
//! No storage/HTTP types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A stored question/answer pair. Read-only from the matcher's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    /// Canonical phrasing of the question. Not unique.
    pub question: String,
    /// Returned verbatim when this entry wins.
    pub answer: String,
}

/// An entry that has not been stored yet (seed input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFaqEntry {
    pub question: String,
    pub answer: String,
}

impl NewFaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// True if either field is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty() || self.answer.trim().is_empty()
    }
}

/// Result of asking the chatbot. Serialized as `{ "reply": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
