//! Handlers for `/disabilities` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use paralympics_core::{
  disability::{Disability, DisabilityPatch, NewDisability},
  store::ParalympicsStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /disabilities`
pub async fn list<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Disability>>, ApiError> {
  let disabilities = store.list_disabilities().await.map_err(ApiError::store)?;
  Ok(Json(disabilities))
}

/// `POST /disabilities`
pub async fn create<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewDisability>,
) -> Result<impl IntoResponse, ApiError> {
  let disability = store.create_disability(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(disability)))
}

/// `GET /disabilities/{id}`
pub async fn get_one<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Disability>, ApiError> {
  let disability = store
    .get_disability(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(disability))
}

/// `PUT /disabilities/{id}`
pub async fn replace<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<NewDisability>,
) -> Result<Json<Disability>, ApiError> {
  apply(&*store, id, body.into()).await
}

/// `PATCH /disabilities/{id}`
pub async fn update<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<DisabilityPatch>,
) -> Result<Json<Disability>, ApiError> {
  apply(&*store, id, body).await
}

async fn apply<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: DisabilityPatch,
) -> Result<Json<Disability>, ApiError> {
  let disability = store
    .update_disability(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(disability))
}

/// `DELETE /disabilities/{id}`
pub async fn delete<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_disability(id).await.map_err(ApiError::store)? {
    return Err(not_found(id));
  }
  Ok(StatusCode::NO_CONTENT)
}

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("disability {id} not found")) }
