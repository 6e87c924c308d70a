//! Quiz questions and their answer options.

use serde::{Deserialize, Serialize};

use crate::patch::{apply, nullable};

// ─── Question ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:            i64,
  pub question_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
  pub question_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionPatch {
  pub question_text: Option<String>,
}

impl NewQuestion {
  pub fn with_id(self, id: i64) -> Question {
    Question { id, question_text: self.question_text }
  }
}

impl From<NewQuestion> for QuestionPatch {
  fn from(q: NewQuestion) -> Self { Self { question_text: Some(q.question_text) } }
}

impl Question {
  pub fn merged(mut self, patch: QuestionPatch) -> Self {
    apply(&mut self.question_text, patch.question_text);
    self
  }
}

// ─── Response ────────────────────────────────────────────────────────────────

/// One answer option for a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
  pub id:            i64,
  pub question_id:   Option<i64>,
  pub response_text: String,
  pub is_correct:    bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewResponse {
  pub question_id:   Option<i64>,
  pub response_text: String,
  pub is_correct:    bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponsePatch {
  #[serde(default, deserialize_with = "nullable")]
  pub question_id:   Option<Option<i64>>,
  pub response_text: Option<String>,
  pub is_correct:    Option<bool>,
}

impl NewResponse {
  pub fn with_id(self, id: i64) -> Response {
    Response {
      id,
      question_id:   self.question_id,
      response_text: self.response_text,
      is_correct:    self.is_correct,
    }
  }
}

impl From<NewResponse> for ResponsePatch {
  fn from(r: NewResponse) -> Self {
    Self {
      question_id:   Some(r.question_id),
      response_text: Some(r.response_text),
      is_correct:    Some(r.is_correct),
    }
  }
}

impl Response {
  pub fn merged(mut self, patch: ResponsePatch) -> Self {
    apply(&mut self.question_id, patch.question_id);
    apply(&mut self.response_text, patch.response_text);
    apply(&mut self.is_correct, patch.is_correct);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn response_patch_flips_correctness_only() {
    let r = NewResponse {
      question_id:   Some(1),
      response_text: "1960, Rome".into(),
      is_correct:    false,
    }
    .with_id(4);
    let patch: ResponsePatch = serde_json::from_str(r#"{"is_correct":true}"#).unwrap();
    let merged = r.clone().merged(patch);
    assert!(merged.is_correct);
    assert_eq!(merged.question_id, r.question_id);
    assert_eq!(merged.response_text, r.response_text);
  }
}
