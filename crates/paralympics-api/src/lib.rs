//! JSON REST API for the Paralympics data set.
//!
//! Exposes an axum [`Router`] backed by any
//! [`paralympics_core::store::ParalympicsStore`]. Transport, tracing and
//! mounting are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", paralympics_api::api_router(store.clone()))
//! ```

pub mod chart;
pub mod disabilities;
pub mod error;
pub mod extract;
pub mod games;
pub mod places;
pub mod quiz;
pub mod teams;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use paralympics_core::store::ParalympicsStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ParalympicsStore + 'static,
{
  Router::new()
    .route("/health", get(health))
    // Games
    .route("/games", get(games::list::<S>).post(games::create::<S>))
    .route(
      "/games/{id}",
      get(games::get_one::<S>)
        .put(games::replace::<S>)
        .patch(games::update::<S>)
        .delete(games::delete::<S>),
    )
    .route("/games/{id}/host", get(games::get_host::<S>).put(games::set_host::<S>))
    .route("/all", get(chart::handler::<S>))
    // Quiz
    .route("/questions", get(quiz::list_questions::<S>).post(quiz::create_question::<S>))
    .route(
      "/questions/{id}",
      get(quiz::get_question::<S>)
        .put(quiz::replace_question::<S>)
        .patch(quiz::update_question::<S>)
        .delete(quiz::delete_question::<S>),
    )
    .route("/questions/{id}/responses", get(quiz::question_responses::<S>))
    .route("/responses", get(quiz::list_responses::<S>).post(quiz::create_response::<S>))
    .route(
      "/responses/{id}",
      get(quiz::get_response::<S>)
        .put(quiz::replace_response::<S>)
        .patch(quiz::update_response::<S>)
        .delete(quiz::delete_response::<S>),
    )
    // Reference data
    .route("/countries", get(places::list_countries::<S>).post(places::create_country::<S>))
    .route(
      "/countries/{id}",
      get(places::get_country::<S>)
        .put(places::replace_country::<S>)
        .patch(places::update_country::<S>)
        .delete(places::delete_country::<S>),
    )
    .route("/hosts", get(places::list_hosts::<S>).post(places::create_host::<S>))
    .route(
      "/hosts/{id}",
      get(places::get_host::<S>)
        .put(places::replace_host::<S>)
        .patch(places::update_host::<S>)
        .delete(places::delete_host::<S>),
    )
    .route("/teams", get(teams::list::<S>).post(teams::create::<S>))
    .route(
      "/teams/{code}",
      get(teams::get_one::<S>)
        .put(teams::replace::<S>)
        .patch(teams::update::<S>)
        .delete(teams::delete::<S>),
    )
    .route("/disabilities", get(disabilities::list::<S>).post(disabilities::create::<S>))
    .route(
      "/disabilities/{id}",
      get(disabilities::get_one::<S>)
        .put(disabilities::replace::<S>)
        .patch(disabilities::update::<S>)
        .delete(disabilities::delete::<S>),
    )
    .with_state(store)
}

/// `GET /health`
async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

// ─── Integration tests ────────────────────────────────────────────────────────
