//! Games: one edition of the Paralympic Games.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  patch::{apply, nullable},
  validate::{self, EventType, IntOrString, Validate},
};

/// A persisted Games edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Games {
  pub id:             i64,
  pub event_type:     EventType,
  pub year:           i32,
  pub start_date:     Option<String>,
  pub end_date:       Option<String>,
  pub countries:      Option<i32>,
  pub events:         Option<i32>,
  pub sports:         Option<i32>,
  pub participants_m: Option<i32>,
  pub participants_f: Option<i32>,
  pub participants:   Option<i32>,
  pub highlights:     Option<String>,
  pub url:            Option<String>,
}

impl Games {
  /// Return a copy of `self` with every field the patch supplies replaced.
  pub fn merged(mut self, patch: GamesPatch) -> Self {
    apply(&mut self.event_type, patch.event_type);
    apply(&mut self.year, patch.year);
    apply(&mut self.start_date, patch.start_date);
    apply(&mut self.end_date, patch.end_date);
    apply(&mut self.countries, patch.countries);
    apply(&mut self.events, patch.events);
    apply(&mut self.sports, patch.sports);
    apply(&mut self.participants_m, patch.participants_m);
    apply(&mut self.participants_f, patch.participants_f);
    apply(&mut self.participants, patch.participants);
    apply(&mut self.highlights, patch.highlights);
    apply(&mut self.url, patch.url);
    self
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// Request body for `POST /games` and `PUT /games/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GamesCreate {
  pub event_type:     String,
  pub year:           IntOrString,
  pub start_date:     Option<String>,
  pub end_date:       Option<String>,
  pub countries:      Option<i32>,
  pub events:         Option<i32>,
  pub sports:         Option<i32>,
  pub participants_m: Option<i32>,
  pub participants_f: Option<i32>,
  pub participants:   Option<i32>,
  pub highlights:     Option<String>,
  pub url:            Option<String>,
}

/// A validated Games edition, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGames {
  pub event_type:     EventType,
  pub year:           i32,
  pub start_date:     Option<String>,
  pub end_date:       Option<String>,
  pub countries:      Option<i32>,
  pub events:         Option<i32>,
  pub sports:         Option<i32>,
  pub participants_m: Option<i32>,
  pub participants_f: Option<i32>,
  pub participants:   Option<i32>,
  pub highlights:     Option<String>,
  pub url:            Option<String>,
}

impl NewGames {
  pub fn with_id(self, id: i64) -> Games {
    Games {
      id,
      event_type:     self.event_type,
      year:           self.year,
      start_date:     self.start_date,
      end_date:       self.end_date,
      countries:      self.countries,
      events:         self.events,
      sports:         self.sports,
      participants_m: self.participants_m,
      participants_f: self.participants_f,
      participants:   self.participants,
      highlights:     self.highlights,
      url:            self.url,
    }
  }
}

impl Validate for GamesCreate {
  type Output = NewGames;

  fn validate(self) -> Result<NewGames> {
    Ok(NewGames {
      event_type:     self.event_type.parse()?,
      year:           validate::year(self.year)?,
      start_date:     self.start_date,
      end_date:       self.end_date,
      countries:      self.countries,
      events:         self.events,
      sports:         self.sports,
      participants_m: self.participants_m,
      participants_f: self.participants_f,
      participants:   self.participants,
      highlights:     self.highlights,
      url:            self.url,
    })
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// Request body for `PATCH /games/{id}`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GamesUpdate {
  pub event_type:     Option<String>,
  pub year:           Option<IntOrString>,
  #[serde(default, deserialize_with = "nullable")]
  pub start_date:     Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub end_date:       Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub countries:      Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub events:         Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub sports:         Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub participants_m: Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub participants_f: Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub participants:   Option<Option<i32>>,
  #[serde(default, deserialize_with = "nullable")]
  pub highlights:     Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub url:            Option<Option<String>>,
}

/// A validated set of field replacements for an existing Games edition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesPatch {
  pub event_type:     Option<EventType>,
  pub year:           Option<i32>,
  pub start_date:     Option<Option<String>>,
  pub end_date:       Option<Option<String>>,
  pub countries:      Option<Option<i32>>,
  pub events:         Option<Option<i32>>,
  pub sports:         Option<Option<i32>>,
  pub participants_m: Option<Option<i32>>,
  pub participants_f: Option<Option<i32>>,
  pub participants:   Option<Option<i32>>,
  pub highlights:     Option<Option<String>>,
  pub url:            Option<Option<String>>,
}

impl Validate for GamesUpdate {
  type Output = GamesPatch;

  fn validate(self) -> Result<GamesPatch> {
    Ok(GamesPatch {
      event_type:     self.event_type.map(|s| s.parse::<EventType>()).transpose()?,
      year:           self.year.map(validate::year).transpose()?,
      start_date:     self.start_date,
      end_date:       self.end_date,
      countries:      self.countries,
      events:         self.events,
      sports:         self.sports,
      participants_m: self.participants_m,
      participants_f: self.participants_f,
      participants:   self.participants,
      highlights:     self.highlights,
      url:            self.url,
    })
  }
}

/// Full replacement: every field is overwritten, including clearing optional
/// fields the new representation leaves out.
impl From<NewGames> for GamesPatch {
  fn from(g: NewGames) -> Self {
    Self {
      event_type:     Some(g.event_type),
      year:           Some(g.year),
      start_date:     Some(g.start_date),
      end_date:       Some(g.end_date),
      countries:      Some(g.countries),
      events:         Some(g.events),
      sports:         Some(g.sports),
      participants_m: Some(g.participants_m),
      participants_f: Some(g.participants_f),
      participants:   Some(g.participants),
      highlights:     Some(g.highlights),
      url:            Some(g.url),
    }
  }
}
