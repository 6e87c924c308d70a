//! Handlers for `/countries` and `/hosts`.
//!
//! Both follow the same shape: `GET`/`POST` on the collection and
//! `GET`/`PUT`/`PATCH`/`DELETE` on `/{id}`. Deleting a country leaves its
//! hosts in place with `country_id` cleared. A host whose `country_id` names
//! no country is rejected with 409.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use paralympics_core::{
  place::{Country, CountryPatch, Host, HostPatch, NewCountry, NewHost},
  store::ParalympicsStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

// ─── Countries ────────────────────────────────────────────────────────────────

/// `GET /countries`
pub async fn list_countries<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Country>>, ApiError> {
  let countries = store.list_countries().await.map_err(ApiError::store)?;
  Ok(Json(countries))
}

/// `POST /countries`
pub async fn create_country<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewCountry>,
) -> Result<impl IntoResponse, ApiError> {
  let country = store.create_country(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(country)))
}

/// `GET /countries/{id}`
pub async fn get_country<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Country>, ApiError> {
  let country = store
    .get_country(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| country_not_found(id))?;
  Ok(Json(country))
}

/// `PUT /countries/{id}`
pub async fn replace_country<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<NewCountry>,
) -> Result<Json<Country>, ApiError> {
  patch_country(&*store, id, body.into()).await
}

/// `PATCH /countries/{id}`
pub async fn update_country<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<CountryPatch>,
) -> Result<Json<Country>, ApiError> {
  patch_country(&*store, id, body).await
}

async fn patch_country<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: CountryPatch,
) -> Result<Json<Country>, ApiError> {
  let country = store
    .update_country(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| country_not_found(id))?;
  Ok(Json(country))
}

/// `DELETE /countries/{id}`
pub async fn delete_country<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_country(id).await.map_err(ApiError::store)? {
    return Err(country_not_found(id));
  }
  Ok(StatusCode::NO_CONTENT)
}

fn country_not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("country {id} not found"))
}

// ─── Hosts ────────────────────────────────────────────────────────────────────

/// `GET /hosts`
pub async fn list_hosts<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Host>>, ApiError> {
  let hosts = store.list_hosts().await.map_err(ApiError::store)?;
  Ok(Json(hosts))
}

/// `POST /hosts`
pub async fn create_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewHost>,
) -> Result<impl IntoResponse, ApiError> {
  let host = store.create_host(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(host)))
}

/// `GET /hosts/{id}`
pub async fn get_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Host>, ApiError> {
  let host = store
    .get_host(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| host_not_found(id))?;
  Ok(Json(host))
}

/// `PUT /hosts/{id}`
pub async fn replace_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<NewHost>,
) -> Result<Json<Host>, ApiError> {
  patch_host(&*store, id, body.into()).await
}

/// `PATCH /hosts/{id}`
pub async fn update_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<HostPatch>,
) -> Result<Json<Host>, ApiError> {
  patch_host(&*store, id, body).await
}

async fn patch_host<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: HostPatch,
) -> Result<Json<Host>, ApiError> {
  let host = store
    .update_host(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| host_not_found(id))?;
  Ok(Json(host))
}

/// `DELETE /hosts/{id}`
pub async fn delete_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_host(id).await.map_err(ApiError::store)? {
    return Err(host_not_found(id));
  }
  Ok(StatusCode::NO_CONTENT)
}

fn host_not_found(id: i64) -> ApiError { ApiError::NotFound(format!("host {id} not found")) }
