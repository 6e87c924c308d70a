//! Integration tests for `SqliteStore` against an in-memory database.

use paralympics_core::{
  Validate as _,
  disability::{DisabilityPatch, NewDisability},
  games::{GamesCreate, GamesPatch, GamesUpdate, NewGames},
  place::{CountryPatch, HostPatch, NewCountry, NewHost},
  quiz::{NewQuestion, NewResponse, QuestionPatch, ResponsePatch},
  store::{ParalympicsStore, StoreError as _},
  team::{TeamCreate, TeamUpdate},
  validate::{EventType, MemberType, Region},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn games(body: serde_json::Value) -> NewGames {
  serde_json::from_value::<GamesCreate>(body)
    .unwrap()
    .validate()
    .unwrap()
}

fn games_patch(body: serde_json::Value) -> GamesPatch {
  serde_json::from_value::<GamesUpdate>(body)
    .unwrap()
    .validate()
    .unwrap()
}

fn host(place_name: &str, country_id: Option<i64>) -> NewHost {
  NewHost {
    place_name: place_name.into(),
    latitude: Some(35.68),
    longitude: Some(139.69),
    country_id,
  }
}

// ─── Games ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_games() {
  let s = store().await;

  let created = s
    .create_games(games(serde_json::json!({
      "event_type": "Summer", "year": 2021, "participants": 4537
    })))
    .await
    .unwrap();

  let fetched = s.get_games(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.event_type, EventType::Summer);
  assert_eq!(fetched.year, 2021);
  assert_eq!(fetched.participants, Some(4537));
}

#[tokio::test]
async fn get_games_missing_returns_none() {
  let s = store().await;
  assert!(s.get_games(42).await.unwrap().is_none());
}

#[tokio::test]
async fn list_games_empty_store() {
  let s = store().await;
  assert!(s.list_games().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_games_returns_every_row() {
  let s = store().await;
  s.create_games(games(serde_json::json!({ "event_type": "summer", "year": 1960 })))
    .await
    .unwrap();
  s.create_games(games(serde_json::json!({ "event_type": "winter", "year": 1976 })))
    .await
    .unwrap();

  let all = s.list_games().await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn update_games_changes_only_supplied_fields() {
  let s = store().await;
  let g = s
    .create_games(games(serde_json::json!({
      "event_type": "summer", "year": 2021, "sports": 22, "url": "https://example.org"
    })))
    .await
    .unwrap();

  let updated = s
    .update_games(g.id, games_patch(serde_json::json!({ "year": 2022 })))
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.year, 2022);
  assert_eq!(updated.sports, Some(22));
  assert_eq!(updated.url.as_deref(), Some("https://example.org"));
  assert_eq!(s.get_games(g.id).await.unwrap().unwrap(), updated);
}

#[tokio::test]
async fn update_games_is_idempotent() {
  let s = store().await;
  let g = s
    .create_games(games(serde_json::json!({ "event_type": "winter", "year": 2018 })))
    .await
    .unwrap();
  let patch = games_patch(serde_json::json!({ "events": 80, "highlights": "PyeongChang" }));

  let first = s.update_games(g.id, patch.clone()).await.unwrap().unwrap();
  let second = s.update_games(g.id, patch).await.unwrap().unwrap();
  assert_eq!(first, second);
}

#[tokio::test]
async fn update_games_missing_returns_none() {
  let s = store().await;
  let result = s.update_games(9, GamesPatch::default()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_games_then_get_returns_none() {
  let s = store().await;
  let g = s
    .create_games(games(serde_json::json!({ "event_type": "summer", "year": 1964 })))
    .await
    .unwrap();

  assert!(s.delete_games(g.id).await.unwrap());
  assert!(s.get_games(g.id).await.unwrap().is_none());
  assert!(!s.delete_games(g.id).await.unwrap());
}

// ─── Host link & chart data ──────────────────────────────────────────────────

#[tokio::test]
async fn set_games_host_links_and_relinks() {
  let s = store().await;
  let g = s
    .create_games(games(serde_json::json!({ "event_type": "summer", "year": 1984 })))
    .await
    .unwrap();
  let first = s.create_host(host("New York", None)).await.unwrap();
  let second = s.create_host(host("Stoke Mandeville", None)).await.unwrap();

  assert!(s.get_games_host(g.id).await.unwrap().is_none());

  s.set_games_host(g.id, first.id).await.unwrap().unwrap();
  let linked = s.set_games_host(g.id, second.id).await.unwrap().unwrap();
  assert_eq!(linked, second);
  assert_eq!(s.get_games_host(g.id).await.unwrap(), Some(second));
}

#[tokio::test]
async fn set_games_host_unknown_ids_return_none() {
  let s = store().await;
  let g = s
    .create_games(games(serde_json::json!({ "event_type": "summer", "year": 1988 })))
    .await
    .unwrap();
  let h = s.create_host(host("Seoul", None)).await.unwrap();

  assert!(s.set_games_host(g.id, 999).await.unwrap().is_none());
  assert!(s.set_games_host(999, h.id).await.unwrap().is_none());
}

#[tokio::test]
async fn chart_data_is_an_inner_join() {
  let s = store().await;
  let japan = s
    .create_country(NewCountry { country_name: "Japan".into() })
    .await
    .unwrap();

  let tokyo = s
    .create_games(games(serde_json::json!({
      "event_type": "summer", "year": 2021, "participants": 4537
    })))
    .await
    .unwrap();
  let nagano = s
    .create_games(games(serde_json::json!({ "event_type": "winter", "year": 1998 })))
    .await
    .unwrap();
  // No host at all.
  s.create_games(games(serde_json::json!({ "event_type": "summer", "year": 2024 })))
    .await
    .unwrap();

  let tokyo_host = s.create_host(host("Tokyo", Some(japan.id))).await.unwrap();
  let orphan_host = s.create_host(host("Nagano", None)).await.unwrap();
  s.set_games_host(tokyo.id, tokyo_host.id).await.unwrap();
  s.set_games_host(nagano.id, orphan_host.id).await.unwrap();

  let rows = s.chart_data().await.unwrap();
  assert_eq!(rows.len(), 1);
  let row = &rows[0];
  assert_eq!(row.country_name, "Japan");
  assert_eq!(row.place_name, "Tokyo");
  assert_eq!(row.event_type, EventType::Summer);
  assert_eq!(row.year, 2021);
  assert_eq!(row.participants, Some(4537));
  assert_eq!(row.latitude, tokyo_host.latitude);
}

#[tokio::test]
async fn chart_data_empty_store() {
  let s = store().await;
  assert!(s.chart_data().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_games_removes_host_link() {
  let s = store().await;
  let uk = s
    .create_country(NewCountry { country_name: "United Kingdom".into() })
    .await
    .unwrap();
  let g = s
    .create_games(games(serde_json::json!({ "event_type": "summer", "year": 2012 })))
    .await
    .unwrap();
  let h = s.create_host(host("London", Some(uk.id))).await.unwrap();
  s.set_games_host(g.id, h.id).await.unwrap();
  assert_eq!(s.chart_data().await.unwrap().len(), 1);

  s.delete_games(g.id).await.unwrap();
  assert!(s.chart_data().await.unwrap().is_empty());
  assert!(s.get_host(h.id).await.unwrap().is_some());
}

// ─── Countries & hosts ───────────────────────────────────────────────────────

#[tokio::test]
async fn country_crud() {
  let s = store().await;
  let c = s
    .create_country(NewCountry { country_name: "Brasil".into() })
    .await
    .unwrap();

  let renamed = s
    .update_country(c.id, CountryPatch { country_name: Some("Brazil".into()) })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(renamed.country_name, "Brazil");
  assert_eq!(s.list_countries().await.unwrap(), vec![renamed]);

  assert!(s.delete_country(c.id).await.unwrap());
  assert!(s.get_country(c.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_country_clears_host_reference() {
  let s = store().await;
  let c = s
    .create_country(NewCountry { country_name: "Italy".into() })
    .await
    .unwrap();
  let h = s.create_host(host("Rome", Some(c.id))).await.unwrap();

  s.delete_country(c.id).await.unwrap();
  let h = s.get_host(h.id).await.unwrap().unwrap();
  assert_eq!(h.country_id, None);
}

#[tokio::test]
async fn host_with_unknown_country_is_a_conflict() {
  let s = store().await;
  let err = s.create_host(host("Nowhere", Some(77))).await.unwrap_err();
  assert!(err.is_conflict());
  assert!(s.list_hosts().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_host_partial() {
  let s = store().await;
  let h = s.create_host(host("Innsbruck", None)).await.unwrap();
  let patch = HostPatch { latitude: Some(None), ..Default::default() };

  let updated = s.update_host(h.id, patch).await.unwrap().unwrap();
  assert_eq!(updated.latitude, None);
  assert_eq!(updated.longitude, h.longitude);
  assert_eq!(updated.place_name, "Innsbruck");
}

// ─── Teams ───────────────────────────────────────────────────────────────────

fn team(body: serde_json::Value) -> paralympics_core::team::Team {
  serde_json::from_value::<TeamCreate>(body)
    .unwrap()
    .validate()
    .unwrap()
}

#[tokio::test]
async fn team_roundtrip_by_code() {
  let s = store().await;
  let t = team(serde_json::json!({
    "code": "NZL", "name": "New Zealand", "region": "Oceania", "member_type": "country"
  }));
  s.create_team(t.clone()).await.unwrap();

  let fetched = s.get_team("NZL".into()).await.unwrap().unwrap();
  assert_eq!(fetched, t);
  assert_eq!(fetched.region, Some(Region::Oceania));
}

#[tokio::test]
async fn duplicate_team_code_is_a_conflict() {
  let s = store().await;
  let t = team(serde_json::json!({ "code": "FRA", "name": "France", "member_type": "country" }));
  s.create_team(t.clone()).await.unwrap();

  let err = s.create_team(t).await.unwrap_err();
  assert!(err.is_conflict());
  assert_eq!(s.list_teams().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_and_delete_team() {
  let s = store().await;
  s.create_team(team(serde_json::json!({
    "code": "TCH", "name": "Czechoslovakia", "region": "Europe", "member_type": "country"
  })))
  .await
  .unwrap();

  let patch = serde_json::from_value::<TeamUpdate>(serde_json::json!({ "member_type": "dissolved" }))
    .unwrap()
    .validate()
    .unwrap();
  let updated = s.update_team("TCH".into(), patch).await.unwrap().unwrap();
  assert_eq!(updated.member_type, MemberType::Dissolved);
  assert_eq!(updated.region, Some(Region::Europe));

  assert!(s.delete_team("TCH".into()).await.unwrap());
  assert!(s.get_team("TCH".into()).await.unwrap().is_none());
}

// ─── Disabilities ────────────────────────────────────────────────────────────

#[tokio::test]
async fn disability_crud() {
  let s = store().await;
  let d = s
    .create_disability(NewDisability { description: "Visual impairment".into() })
    .await
    .unwrap();
  assert_eq!(s.get_disability(d.id).await.unwrap(), Some(d.clone()));

  let patch = DisabilityPatch { description: Some("Vision impairment".into()) };
  let updated = s.update_disability(d.id, patch).await.unwrap().unwrap();
  assert_eq!(updated.description, "Vision impairment");
  assert_eq!(s.list_disabilities().await.unwrap().len(), 1);

  assert!(s.delete_disability(d.id).await.unwrap());
  assert!(s.update_disability(d.id, DisabilityPatch::default()).await.unwrap().is_none());
}

// ─── Quiz ────────────────────────────────────────────────────────────────────

async fn question(s: &SqliteStore, text: &str) -> i64 {
  s.create_question(NewQuestion { question_text: text.into() })
    .await
    .unwrap()
    .id
}

fn answer(question_id: i64, text: &str, is_correct: bool) -> NewResponse {
  NewResponse {
    question_id: Some(question_id),
    response_text: text.into(),
    is_correct,
  }
}

#[tokio::test]
async fn responses_for_unknown_question_is_none() {
  let s = store().await;
  assert!(s.responses_for_question(5).await.unwrap().is_none());
}

#[tokio::test]
async fn responses_for_question_without_answers_is_empty() {
  let s = store().await;
  let q = question(&s, "Where were the first Paralympics held?").await;
  assert_eq!(s.responses_for_question(q).await.unwrap(), Some(vec![]));
}

#[tokio::test]
async fn responses_for_question_filters_by_question() {
  let s = store().await;
  let q1 = question(&s, "Where were the first Paralympics held?").await;
  let q2 = question(&s, "How many sports in Tokyo 2020?").await;

  s.create_response(answer(q1, "Rome", true)).await.unwrap();
  s.create_response(answer(q1, "Tokyo", false)).await.unwrap();
  s.create_response(answer(q2, "22", true)).await.unwrap();

  let responses = s.responses_for_question(q1).await.unwrap().unwrap();
  assert_eq!(responses.len(), 2);
  assert!(responses.iter().all(|r| r.question_id == Some(q1)));
  assert_eq!(s.list_responses().await.unwrap().len(), 3);
}

#[tokio::test]
async fn response_to_unknown_question_is_rolled_back() {
  let s = store().await;
  let err = s
    .create_response(answer(404, "Nobody asked", false))
    .await
    .unwrap_err();
  assert!(err.is_conflict());
  assert!(s.list_responses().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_question_deletes_its_responses() {
  let s = store().await;
  let q = question(&s, "Which city hosted 1960?").await;
  let r = s.create_response(answer(q, "Rome", true)).await.unwrap();

  assert!(s.delete_question(q).await.unwrap());
  assert!(s.get_question(q).await.unwrap().is_none());
  assert!(s.get_response(r.id).await.unwrap().is_none());
}

#[tokio::test]
async fn update_question_and_response() {
  let s = store().await;
  let q = question(&s, "Wich year?").await;
  let r = s.create_response(answer(q, "1960", false)).await.unwrap();

  let q = s
    .update_question(q, QuestionPatch { question_text: Some("Which year?".into()) })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(q.question_text, "Which year?");
  assert_eq!(s.list_questions().await.unwrap(), vec![q]);

  let patch = ResponsePatch { is_correct: Some(true), ..Default::default() };
  let r = s.update_response(r.id, patch).await.unwrap().unwrap();
  assert!(r.is_correct);
  assert_eq!(r.response_text, "1960");

  assert!(s.delete_response(r.id).await.unwrap());
  assert!(!s.delete_response(r.id).await.unwrap());
}
