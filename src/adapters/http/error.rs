//! API error type. Maps domain failures to JSON `{ "reply": ... }` responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

/// Body text returned for any server-side failure. Details go to the log only.
pub const GENERIC_ERROR_REPLY: &str = "Sorry, something went wrong. Please try again!";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Internal error: {0}")]
    Internal(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reply) = match &self {
            ApiError::MalformedPayload => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_REPLY.to_string(),
            ),
        };

        (status, Json(json!({ "reply": reply }))).into_response()
    }
}
