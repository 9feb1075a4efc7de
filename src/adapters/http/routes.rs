//! Route handlers: chatbot ask and health.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use super::{error::ApiError, server::AppState};
use crate::domain::ChatReply;

/// `POST /chatbot/ask` body. Other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

pub async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "rejected chatbot payload");
        ApiError::MalformedPayload
    })?;

    let reply = state.chatbot.ask(&request.message).await?;

    Ok(Json(reply))
}

pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let faq_entries = state.store.count().await?;
    Ok(Json(json!({ "status": "ok", "faq_entries": faq_entries })))
}
