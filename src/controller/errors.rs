use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::store::errors::DBError;

#[derive(Debug, Error)]
pub(super) enum ApiError {
  #[error("{0} not found")]
  NotFound(&'static str),
  #[error("invalid request: {0}")]
  BadRequest(String),
  #[error(transparent)]
  Store(#[from] DBError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
      ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
      ApiError::Store(err) => {
        // The store never logs; failures are reported once, here at the
        // boundary, and the wire carries no internals.
        tracing::error!(%err, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
      }
    };

    (status, Json(json!({ "error": message }))).into_response()
  }
}
