//! Cross-cutting concerns shared by adapters and wiring.

pub mod config;
