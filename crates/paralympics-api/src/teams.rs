//! Handlers for `/teams` endpoints. Teams are addressed by their code
//! (`/teams/GBR`), which is fixed once created.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use paralympics_core::{
  Validate as _,
  store::ParalympicsStore,
  team::{Team, TeamCreate, TeamPatch, TeamUpdate},
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /teams`
pub async fn list<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Team>>, ApiError> {
  let teams = store.list_teams().await.map_err(ApiError::store)?;
  Ok(Json(teams))
}

/// `POST /teams`. 409 if the code is taken.
pub async fn create<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<TeamCreate>,
) -> Result<impl IntoResponse, ApiError> {
  let team = store
    .create_team(body.validate()?)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(team)))
}

/// `GET /teams/{code}`
pub async fn get_one<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<Json<Team>, ApiError> {
  let team = store
    .get_team(code.clone())
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(&code))?;
  Ok(Json(team))
}

/// `PUT /teams/{code}`. The body's `code` must match the path.
pub async fn replace<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
  AppJson(body): AppJson<TeamCreate>,
) -> Result<Json<Team>, ApiError> {
  let team = body.validate()?;
  if team.code != code {
    return Err(ApiError::BadRequest(format!(
      "team code {} does not match {code}",
      team.code
    )));
  }
  apply(&*store, code, team.into()).await
}

/// `PATCH /teams/{code}`
pub async fn update<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
  AppJson(body): AppJson<TeamUpdate>,
) -> Result<Json<Team>, ApiError> {
  apply(&*store, code, body.validate()?).await
}

async fn apply<S: ParalympicsStore>(
  store: &S,
  code: String,
  patch: TeamPatch,
) -> Result<Json<Team>, ApiError> {
  let team = store
    .update_team(code.clone(), patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(&code))?;
  Ok(Json(team))
}

/// `DELETE /teams/{code}`
pub async fn delete<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_team(code.clone()).await.map_err(ApiError::store)? {
    return Err(not_found(&code));
  }
  Ok(StatusCode::NO_CONTENT)
}

fn not_found(code: &str) -> ApiError { ApiError::NotFound(format!("team {code} not found")) }
