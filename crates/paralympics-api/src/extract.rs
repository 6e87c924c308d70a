//! Request extractors.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Request},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `axum::Json` with its rejection reported through [`ApiError`], so that
/// malformed bodies get the same `{"error": ...}` envelope as every other
/// failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
  T: DeserializeOwned,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state).await?;
    Ok(AppJson(value))
  }
}

/// `axum::extract::Path` with its rejection reported through [`ApiError`],
/// so `/games/abc` answers 400 in the JSON envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
    Ok(AppPath(value))
  }
}
