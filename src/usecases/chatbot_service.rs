//! FAQ chatbot: user message -> keywords -> best-scoring stored question -> answer.
//!
//! - Empty keyword set short-circuits to the fallback without touching the store
//! - Every request re-reads the full FAQ collection (no caching)
//! - Store failures are logged and propagated; no retry

use crate::domain::{ChatReply, DomainError, best_match, extract_keywords};
use crate::ports::{ChatbotPort, FaqStorePort};
use std::sync::Arc;
use tracing::{debug, error};

/// Reply used when no stored question shares a keyword with the message.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "I'm not sure about that. Try asking something like 'What is a balanced diet?'";

/// Chatbot service. Stateless between requests; safe to share via Arc.
pub struct ChatbotService {
    store: Arc<dyn FaqStorePort>,
    fallback_reply: String,
}

impl ChatbotService {
    pub fn new(store: Arc<dyn FaqStorePort>) -> Self {
        Self::with_fallback(store, DEFAULT_FALLBACK_REPLY)
    }

    pub fn with_fallback(store: Arc<dyn FaqStorePort>, fallback_reply: impl Into<String>) -> Self {
        Self {
            store,
            fallback_reply: fallback_reply.into(),
        }
    }

    pub fn fallback_reply(&self) -> &str {
        &self.fallback_reply
    }

    fn fallback(&self) -> ChatReply {
        ChatReply::new(self.fallback_reply.as_str())
    }
}

#[async_trait::async_trait]
impl ChatbotPort for ChatbotService {
    async fn ask(&self, message: &str) -> Result<ChatReply, DomainError> {
        let user_keywords = extract_keywords(message);
        if user_keywords.is_empty() {
            debug!("no keywords in message, returning fallback");
            return Ok(self.fallback());
        }

        let entries = self.store.fetch_all().await.map_err(|e| {
            error!(error = %e, "failed to fetch FAQ entries");
            e
        })?;

        match best_match(&user_keywords, &entries) {
            Some(m) => {
                debug!(
                    entry_id = m.entry.id,
                    score = m.score,
                    scanned = entries.len(),
                    "matched FAQ entry"
                );
                Ok(ChatReply::new(m.entry.answer.as_str()))
            }
            None => {
                debug!(scanned = entries.len(), "no FAQ entry matched");
                Ok(self.fallback())
            }
        }
    }
}
