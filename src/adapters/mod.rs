//! Infrastructure adapters. Implement ports.
//!
//! HTTP (inbound), SQLite/in-memory storage and seed files (outbound). Map errors to DomainError.

pub mod http;
pub mod persistence;
