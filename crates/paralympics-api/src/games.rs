//! Handlers for `/games` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/games` | Every edition |
//! | `POST`   | `/games` | Body: [`GamesCreate`]; returns 201 |
//! | `GET`    | `/games/{id}` | 404 if not found |
//! | `PUT`    | `/games/{id}` | Body: [`GamesCreate`]; replaces every field |
//! | `PATCH`  | `/games/{id}` | Body: [`GamesUpdate`]; only supplied fields change |
//! | `DELETE` | `/games/{id}` | 204, or 404 if not found |
//! | `GET`    | `/games/{id}/host` | The linked host |
//! | `PUT`    | `/games/{id}/host` | Body: `{"host_id": n}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use paralympics_core::{
  Validate as _,
  games::{Games, GamesCreate, GamesPatch, GamesUpdate},
  place::{Host, HostLink},
  store::ParalympicsStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

// ─── Collection ───────────────────────────────────────────────────────────────

/// `GET /games`
pub async fn list<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Games>>, ApiError> {
  let games = store.list_games().await.map_err(ApiError::store)?;
  Ok(Json(games))
}

/// `POST /games`: returns 201 + the stored edition.
pub async fn create<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<GamesCreate>,
) -> Result<impl IntoResponse, ApiError> {
  let input = body.validate()?;
  let games = store.create_games(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = games.id, "created games");
  Ok((StatusCode::CREATED, Json(games)))
}

// ─── Single edition ───────────────────────────────────────────────────────────

/// `GET /games/{id}`
pub async fn get_one<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Games>, ApiError> {
  let games = store
    .get_games(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(games))
}

/// `PUT /games/{id}`. The body must be a complete, valid edition.
pub async fn replace<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<GamesCreate>,
) -> Result<Json<Games>, ApiError> {
  let patch = GamesPatch::from(body.validate()?);
  apply(&*store, id, patch).await
}

/// `PATCH /games/{id}`
pub async fn update<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<GamesUpdate>,
) -> Result<Json<Games>, ApiError> {
  let patch = body.validate()?;
  apply(&*store, id, patch).await
}

async fn apply<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: GamesPatch,
) -> Result<Json<Games>, ApiError> {
  let games = store
    .update_games(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(games))
}

/// `DELETE /games/{id}`
pub async fn delete<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_games(id).await.map_err(ApiError::store)? {
    return Err(not_found(id));
  }
  tracing::debug!(id, "deleted games");
  Ok(StatusCode::NO_CONTENT)
}

// ─── Host link ────────────────────────────────────────────────────────────────

/// `GET /games/{id}/host`
pub async fn get_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Host>, ApiError> {
  let host = store
    .get_games_host(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("no host linked to games {id}")))?;
  Ok(Json(host))
}

/// `PUT /games/{id}/host` with body `{"host_id": n}`
pub async fn set_host<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(HostLink { host_id }): AppJson<HostLink>,
) -> Result<Json<Host>, ApiError> {
  let host = store
    .set_games_host(id, host_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("games {id} or host {host_id} not found")))?;
  Ok(Json(host))
}

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("games {id} not found")) }
