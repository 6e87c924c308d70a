//! [`SqliteStore`] is the SQLite implementation of [`ParalympicsStore`].

use std::path::Path;

use paralympics_core::{
  chart::ChartRow,
  disability::{Disability, DisabilityPatch, NewDisability},
  games::{Games, GamesPatch, NewGames},
  place::{Country, CountryPatch, Host, HostPatch, NewCountry, NewHost},
  quiz::{NewQuestion, NewResponse, Question, QuestionPatch, Response, ResponsePatch},
  store::ParalympicsStore,
  team::{Team, TeamPatch},
};
use rusqlite::Transaction;

use crate::{
  Result,
  schema::SCHEMA,
  tables::{chart, disabilities, games, places, quiz, teams},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Paralympics store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened sqlite store");
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `f` inside one transaction on the connection thread.
  ///
  /// The transaction commits only if `f` succeeds; on error the
  /// `Transaction` is dropped, which rolls it back.
  async fn transact<T, F>(&self, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&Transaction<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let out = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
      })
      .await?;
    Ok(out)
  }
}

// ─── ParalympicsStore impl ───────────────────────────────────────────────────

impl ParalympicsStore for SqliteStore {
  type Error = crate::Error;

  // ── Games ─────────────────────────────────────────────────────────────────

  async fn get_games(&self, id: i64) -> Result<Option<Games>> {
    self.transact(move |tx| games::select(tx, id)).await
  }

  async fn list_games(&self) -> Result<Vec<Games>> {
    self.transact(|tx| games::select_all(tx)).await
  }

  async fn create_games(&self, input: NewGames) -> Result<Games> {
    self.transact(move |tx| games::insert(tx, input)).await
  }

  async fn update_games(&self, id: i64, patch: GamesPatch) -> Result<Option<Games>> {
    self.transact(move |tx| games::update(tx, id, patch)).await
  }

  async fn delete_games(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| games::delete(tx, id)).await
  }

  async fn get_games_host(&self, games_id: i64) -> Result<Option<Host>> {
    self.transact(move |tx| games::select_host(tx, games_id)).await
  }

  async fn set_games_host(&self, games_id: i64, host_id: i64) -> Result<Option<Host>> {
    self
      .transact(move |tx| games::link_host(tx, games_id, host_id))
      .await
  }

  async fn chart_data(&self) -> Result<Vec<ChartRow>> {
    self.transact(|tx| chart::select_all(tx)).await
  }

  // ── Countries ─────────────────────────────────────────────────────────────

  async fn get_country(&self, id: i64) -> Result<Option<Country>> {
    self.transact(move |tx| places::select_country(tx, id)).await
  }

  async fn list_countries(&self) -> Result<Vec<Country>> {
    self.transact(|tx| places::select_countries(tx)).await
  }

  async fn create_country(&self, input: NewCountry) -> Result<Country> {
    self.transact(move |tx| places::insert_country(tx, input)).await
  }

  async fn update_country(&self, id: i64, patch: CountryPatch) -> Result<Option<Country>> {
    self
      .transact(move |tx| places::update_country(tx, id, patch))
      .await
  }

  async fn delete_country(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| places::delete_country(tx, id)).await
  }

  // ── Hosts ─────────────────────────────────────────────────────────────────

  async fn get_host(&self, id: i64) -> Result<Option<Host>> {
    self.transact(move |tx| places::select_host(tx, id)).await
  }

  async fn list_hosts(&self) -> Result<Vec<Host>> {
    self.transact(|tx| places::select_hosts(tx)).await
  }

  async fn create_host(&self, input: NewHost) -> Result<Host> {
    self.transact(move |tx| places::insert_host(tx, input)).await
  }

  async fn update_host(&self, id: i64, patch: HostPatch) -> Result<Option<Host>> {
    self
      .transact(move |tx| places::update_host(tx, id, patch))
      .await
  }

  async fn delete_host(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| places::delete_host(tx, id)).await
  }

  // ── Teams ─────────────────────────────────────────────────────────────────

  async fn get_team(&self, code: String) -> Result<Option<Team>> {
    self.transact(move |tx| teams::select(tx, &code)).await
  }

  async fn list_teams(&self) -> Result<Vec<Team>> {
    self.transact(|tx| teams::select_all(tx)).await
  }

  async fn create_team(&self, team: Team) -> Result<Team> {
    self.transact(move |tx| teams::insert(tx, team)).await
  }

  async fn update_team(&self, code: String, patch: TeamPatch) -> Result<Option<Team>> {
    self
      .transact(move |tx| teams::update(tx, &code, patch))
      .await
  }

  async fn delete_team(&self, code: String) -> Result<bool> {
    self.transact(move |tx| teams::delete(tx, &code)).await
  }

  // ── Disabilities ──────────────────────────────────────────────────────────

  async fn get_disability(&self, id: i64) -> Result<Option<Disability>> {
    self.transact(move |tx| disabilities::select(tx, id)).await
  }

  async fn list_disabilities(&self) -> Result<Vec<Disability>> {
    self.transact(|tx| disabilities::select_all(tx)).await
  }

  async fn create_disability(&self, input: NewDisability) -> Result<Disability> {
    self
      .transact(move |tx| disabilities::insert(tx, input))
      .await
  }

  async fn update_disability(
    &self,
    id: i64,
    patch: DisabilityPatch,
  ) -> Result<Option<Disability>> {
    self
      .transact(move |tx| disabilities::update(tx, id, patch))
      .await
  }

  async fn delete_disability(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| disabilities::delete(tx, id)).await
  }

  // ── Quiz ──────────────────────────────────────────────────────────────────

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    self.transact(move |tx| quiz::select_question(tx, id)).await
  }

  async fn list_questions(&self) -> Result<Vec<Question>> {
    self.transact(|tx| quiz::select_questions(tx)).await
  }

  async fn create_question(&self, input: NewQuestion) -> Result<Question> {
    self.transact(move |tx| quiz::insert_question(tx, input)).await
  }

  async fn update_question(&self, id: i64, patch: QuestionPatch) -> Result<Option<Question>> {
    self
      .transact(move |tx| quiz::update_question(tx, id, patch))
      .await
  }

  async fn delete_question(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| quiz::delete_question(tx, id)).await
  }

  async fn get_response(&self, id: i64) -> Result<Option<Response>> {
    self.transact(move |tx| quiz::select_response(tx, id)).await
  }

  async fn list_responses(&self) -> Result<Vec<Response>> {
    self.transact(|tx| quiz::select_responses(tx)).await
  }

  async fn responses_for_question(&self, question_id: i64) -> Result<Option<Vec<Response>>> {
    self
      .transact(move |tx| quiz::select_responses_for(tx, question_id))
      .await
  }

  async fn create_response(&self, input: NewResponse) -> Result<Response> {
    self.transact(move |tx| quiz::insert_response(tx, input)).await
  }

  async fn update_response(&self, id: i64, patch: ResponsePatch) -> Result<Option<Response>> {
    self
      .transact(move |tx| quiz::update_response(tx, id, patch))
      .await
  }

  async fn delete_response(&self, id: i64) -> Result<bool> {
    self.transact(move |tx| quiz::delete_response(tx, id)).await
  }
}
