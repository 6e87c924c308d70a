//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use paralympics_core::{ValidationError, store::StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The body could not be read as the expected JSON shape.
  #[error(transparent)]
  Body(#[from] JsonRejection),

  /// A path segment could not be parsed, e.g. `/games/abc`.
  #[error(transparent)]
  Path(#[from] PathRejection),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

const CONFLICT_MESSAGE: &str = "request violates a data constraint";
const STORE_MESSAGE: &str = "internal storage error";

impl ApiError {
  /// Classify a store failure: constraint violations caused by the request
  /// become [`ApiError::Conflict`], anything else is an internal error.
  pub fn store<E: StoreError>(e: E) -> Self {
    if e.is_conflict() {
      tracing::warn!(error = %e, "request rejected by a store constraint");
      ApiError::Conflict(CONFLICT_MESSAGE.to_string())
    } else {
      ApiError::Store(Box::new(e))
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => error_body(StatusCode::NOT_FOUND, m),
      ApiError::BadRequest(m) => error_body(StatusCode::BAD_REQUEST, m),
      ApiError::Conflict(m) => error_body(StatusCode::CONFLICT, m),
      ApiError::Body(rejection) => error_body(rejection.status(), rejection.body_text()),
      ApiError::Path(rejection) => error_body(rejection.status(), rejection.body_text()),
      ApiError::Validation(e) => {
        let mut body = json!({ "error": e.to_string(), "field": e.field() });
        if let Some(allowed) = e.allowed() {
          body["allowed"] = json!(allowed);
        }
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        error_body(StatusCode::INTERNAL_SERVER_ERROR, STORE_MESSAGE.to_string())
      }
    }
  }
}

fn error_body(status: StatusCode, message: String) -> Response {
  (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::Value;

  #[derive(Debug, thiserror::Error)]
  #[error("disk I/O error on /var/lib/paralympics.db")]
  struct Faulty {
    conflict: bool,
  }

  impl StoreError for Faulty {
    fn is_conflict(&self) -> bool { self.conflict }
  }

  async fn render(err: ApiError) -> (StatusCode, Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn store_error_is_500_without_detail() {
    let (status, body) = render(ApiError::Store(Box::new(Faulty { conflict: false }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal storage error" }));
    assert!(!body.to_string().contains("disk I/O"));
  }

  #[tokio::test]
  async fn store_classifies_conflicts() {
    let (status, body) = render(ApiError::store(Faulty { conflict: true })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "request violates a data constraint" }));

    let (status, _) = render(ApiError::store(Faulty { conflict: false })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[tokio::test]
  async fn validation_error_names_field_and_allowed_values() {
    let err = "autumn".parse::<paralympics_core::validate::EventType>().unwrap_err();
    let (status, body) = render(err.into()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "event_type");
    assert_eq!(body["allowed"], json!(["winter", "summer"]));
  }
}
