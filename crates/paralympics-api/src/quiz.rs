//! Handlers for the quiz: `/questions` and `/responses`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/questions` | |
//! | `POST` | `/questions` | Body: `{"question_text": "..."}` |
//! | `GET`, `PUT`, `PATCH`, `DELETE` | `/questions/{id}` | Deleting a question deletes its responses |
//! | `GET`  | `/questions/{id}/responses` | `[]` if the question has none, 404 if it does not exist |
//! | `GET`  | `/responses` | |
//! | `POST` | `/responses` | 409 if `question_id` names no question |
//! | `GET`, `PUT`, `PATCH`, `DELETE` | `/responses/{id}` | |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use paralympics_core::{
  quiz::{NewQuestion, NewResponse, Question, QuestionPatch, Response, ResponsePatch},
  store::ParalympicsStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

// ─── Questions ────────────────────────────────────────────────────────────────

/// `GET /questions`
pub async fn list_questions<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Question>>, ApiError> {
  let questions = store.list_questions().await.map_err(ApiError::store)?;
  Ok(Json(questions))
}

/// `POST /questions`
pub async fn create_question<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewQuestion>,
) -> Result<impl IntoResponse, ApiError> {
  let question = store.create_question(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(question)))
}

/// `GET /questions/{id}`
pub async fn get_question<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Question>, ApiError> {
  let question = store
    .get_question(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| question_not_found(id))?;
  Ok(Json(question))
}

/// `PUT /questions/{id}`
pub async fn replace_question<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<NewQuestion>,
) -> Result<Json<Question>, ApiError> {
  patch_question(&*store, id, body.into()).await
}

/// `PATCH /questions/{id}`
pub async fn update_question<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<QuestionPatch>,
) -> Result<Json<Question>, ApiError> {
  patch_question(&*store, id, body).await
}

async fn patch_question<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: QuestionPatch,
) -> Result<Json<Question>, ApiError> {
  let question = store
    .update_question(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| question_not_found(id))?;
  Ok(Json(question))
}

/// `DELETE /questions/{id}`
pub async fn delete_question<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_question(id).await.map_err(ApiError::store)? {
    return Err(question_not_found(id));
  }
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /questions/{id}/responses`
pub async fn question_responses<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Vec<Response>>, ApiError> {
  let responses = store
    .responses_for_question(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| question_not_found(id))?;
  Ok(Json(responses))
}

fn question_not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("question {id} not found"))
}

// ─── Responses ────────────────────────────────────────────────────────────────

/// `GET /responses`
pub async fn list_responses<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Response>>, ApiError> {
  let responses = store.list_responses().await.map_err(ApiError::store)?;
  Ok(Json(responses))
}

/// `POST /responses`
pub async fn create_response<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewResponse>,
) -> Result<impl IntoResponse, ApiError> {
  let response = store.create_response(body).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /responses/{id}`
pub async fn get_response<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<Json<Response>, ApiError> {
  let response = store
    .get_response(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| response_not_found(id))?;
  Ok(Json(response))
}

/// `PUT /responses/{id}`
pub async fn replace_response<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<NewResponse>,
) -> Result<Json<Response>, ApiError> {
  patch_response(&*store, id, body.into()).await
}

/// `PATCH /responses/{id}`
pub async fn update_response<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<ResponsePatch>,
) -> Result<Json<Response>, ApiError> {
  patch_response(&*store, id, body).await
}

async fn patch_response<S: ParalympicsStore>(
  store: &S,
  id: i64,
  patch: ResponsePatch,
) -> Result<Json<Response>, ApiError> {
  let response = store
    .update_response(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| response_not_found(id))?;
  Ok(Json(response))
}

/// `DELETE /responses/{id}`
pub async fn delete_response<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
) -> Result<StatusCode, ApiError> {
  if !store.delete_response(id).await.map_err(ApiError::store)? {
    return Err(response_not_found(id));
  }
  Ok(StatusCode::NO_CONTENT)
}

fn response_not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("response {id} not found"))
}
