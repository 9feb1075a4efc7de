//! Inbound port. HTTP handlers call into the application.

use crate::domain::{ChatReply, DomainError};

/// Chatbot use case: answer a free-text question from the FAQ corpus.
#[async_trait::async_trait]
pub trait ChatbotPort: Send + Sync {
    /// Return the best-matching answer, or the fallback reply when nothing matches.
    ///
    /// Errors only when the FAQ store cannot be read.
    async fn ask(&self, message: &str) -> Result<ChatReply, DomainError>;
}
