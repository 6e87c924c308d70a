//! Disability classification categories.

use serde::{Deserialize, Serialize};

use crate::patch::apply;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disability {
  pub id:          i64,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDisability {
  pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisabilityPatch {
  pub description: Option<String>,
}

impl NewDisability {
  pub fn with_id(self, id: i64) -> Disability {
    Disability { id, description: self.description }
  }
}

impl From<NewDisability> for DisabilityPatch {
  fn from(d: NewDisability) -> Self { Self { description: Some(d.description) } }
}

impl Disability {
  pub fn merged(mut self, patch: DisabilityPatch) -> Self {
    apply(&mut self.description, patch.description);
    self
  }
}
