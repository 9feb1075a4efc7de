//! HTTP adapter (axum). Exposes the chatbot over JSON.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, build_router, serve};
