//! Application use cases. Orchestrate domain logic via ports.

pub mod chatbot_service;
pub mod seed_service;

pub use chatbot_service::{ChatbotService, DEFAULT_FALLBACK_REPLY};
pub use seed_service::{SeedReport, SeedService};
