//! The `ParalympicsStore` trait.
//!
//! Implemented by storage backends (e.g. `paralympics-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Every method is one unit of work: the backend runs it inside a single
//! transaction that is committed on success and rolled back on any failure.
//! Lookups by id return `None` (or `false` for deletes) when the target does
//! not exist; callers decide how to surface that.

use std::future::Future;

use crate::{
  chart::ChartRow,
  disability::{Disability, DisabilityPatch, NewDisability},
  games::{Games, GamesPatch, NewGames},
  place::{Country, CountryPatch, Host, HostPatch, NewCountry, NewHost},
  quiz::{NewQuestion, NewResponse, Question, QuestionPatch, Response, ResponsePatch},
  team::{Team, TeamPatch},
};

/// Error type returned by a store backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` if the failure was a constraint violation caused by the request
  /// itself (dangling foreign key, duplicate natural key) rather than a fault
  /// in the store.
  fn is_conflict(&self) -> bool;
}

/// Abstraction over a Paralympics data store backend.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait ParalympicsStore: Send + Sync {
  type Error: StoreError;

  // ── Games ─────────────────────────────────────────────────────────────

  fn get_games(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Games>, Self::Error>> + Send + '_;

  fn list_games(&self) -> impl Future<Output = Result<Vec<Games>, Self::Error>> + Send + '_;

  fn create_games(
    &self,
    input: NewGames,
  ) -> impl Future<Output = Result<Games, Self::Error>> + Send + '_;

  /// Apply `patch` over the stored edition. `None` if `id` is unknown.
  fn update_games(
    &self,
    id: i64,
    patch: GamesPatch,
  ) -> impl Future<Output = Result<Option<Games>, Self::Error>> + Send + '_;

  /// Returns `false` if `id` is unknown.
  fn delete_games(&self, id: i64) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// The host linked to a Games edition, if both exist.
  fn get_games_host(
    &self,
    games_id: i64,
  ) -> impl Future<Output = Result<Option<Host>, Self::Error>> + Send + '_;

  /// Link (or re-link) a Games edition to a host. `None` if either id is
  /// unknown.
  fn set_games_host(
    &self,
    games_id: i64,
    host_id: i64,
  ) -> impl Future<Output = Result<Option<Host>, Self::Error>> + Send + '_;

  /// Inner join of Games, their host and the host's country: editions
  /// without a host, or whose host has no resolvable country, are omitted.
  fn chart_data(&self) -> impl Future<Output = Result<Vec<ChartRow>, Self::Error>> + Send + '_;

  // ── Countries ─────────────────────────────────────────────────────────

  fn get_country(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + '_;

  fn list_countries(&self)
  -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  fn create_country(
    &self,
    input: NewCountry,
  ) -> impl Future<Output = Result<Country, Self::Error>> + Send + '_;

  fn update_country(
    &self,
    id: i64,
    patch: CountryPatch,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + '_;

  fn delete_country(&self, id: i64)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Hosts ─────────────────────────────────────────────────────────────

  fn get_host(&self, id: i64)
  -> impl Future<Output = Result<Option<Host>, Self::Error>> + Send + '_;

  fn list_hosts(&self) -> impl Future<Output = Result<Vec<Host>, Self::Error>> + Send + '_;

  fn create_host(
    &self,
    input: NewHost,
  ) -> impl Future<Output = Result<Host, Self::Error>> + Send + '_;

  fn update_host(
    &self,
    id: i64,
    patch: HostPatch,
  ) -> impl Future<Output = Result<Option<Host>, Self::Error>> + Send + '_;

  fn delete_host(&self, id: i64) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Teams ─────────────────────────────────────────────────────────────

  fn get_team(
    &self,
    code: String,
  ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send + '_;

  fn list_teams(&self) -> impl Future<Output = Result<Vec<Team>, Self::Error>> + Send + '_;

  /// Fails with a conflict if a team with the same code exists.
  fn create_team(&self, team: Team)
  -> impl Future<Output = Result<Team, Self::Error>> + Send + '_;

  fn update_team(
    &self,
    code: String,
    patch: TeamPatch,
  ) -> impl Future<Output = Result<Option<Team>, Self::Error>> + Send + '_;

  fn delete_team(&self, code: String)
  -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Disabilities ──────────────────────────────────────────────────────

  fn get_disability(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Disability>, Self::Error>> + Send + '_;

  fn list_disabilities(
    &self,
  ) -> impl Future<Output = Result<Vec<Disability>, Self::Error>> + Send + '_;

  fn create_disability(
    &self,
    input: NewDisability,
  ) -> impl Future<Output = Result<Disability, Self::Error>> + Send + '_;

  fn update_disability(
    &self,
    id: i64,
    patch: DisabilityPatch,
  ) -> impl Future<Output = Result<Option<Disability>, Self::Error>> + Send + '_;

  fn delete_disability(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Quiz ──────────────────────────────────────────────────────────────

  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  fn list_questions(
    &self,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  fn create_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  fn update_question(
    &self,
    id: i64,
    patch: QuestionPatch,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Also deletes the question's responses.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn get_response(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Response>, Self::Error>> + Send + '_;

  fn list_responses(
    &self,
  ) -> impl Future<Output = Result<Vec<Response>, Self::Error>> + Send + '_;

  /// `None` if the question does not exist; an empty vector if it exists but
  /// has no responses yet.
  fn responses_for_question(
    &self,
    question_id: i64,
  ) -> impl Future<Output = Result<Option<Vec<Response>>, Self::Error>> + Send + '_;

  fn create_response(
    &self,
    input: NewResponse,
  ) -> impl Future<Output = Result<Response, Self::Error>> + Send + '_;

  fn update_response(
    &self,
    id: i64,
    patch: ResponsePatch,
  ) -> impl Future<Output = Result<Option<Response>, Self::Error>> + Send + '_;

  fn delete_response(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
