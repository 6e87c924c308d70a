//! Teams: participating delegations, keyed by their `code`.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  patch::{apply, nullable},
  validate::{MemberType, Region, Validate},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
  /// Natural identifier, e.g. `"GBR"`.
  pub code:        String,
  pub name:        String,
  pub region:      Option<Region>,
  pub member_type: MemberType,
  pub notes:       Option<String>,
  pub country_id:  Option<i64>,
}

impl Team {
  pub fn merged(mut self, patch: TeamPatch) -> Self {
    apply(&mut self.name, patch.name);
    apply(&mut self.region, patch.region);
    apply(&mut self.member_type, patch.member_type);
    apply(&mut self.notes, patch.notes);
    apply(&mut self.country_id, patch.country_id);
    self
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// Request body for `POST /teams`.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamCreate {
  pub code:        String,
  pub name:        String,
  pub region:      Option<String>,
  pub member_type: String,
  pub notes:       Option<String>,
  pub country_id:  Option<i64>,
}

impl Validate for TeamCreate {
  type Output = Team;

  fn validate(self) -> Result<Team> {
    Ok(Team {
      code:        self.code,
      name:        self.name,
      region:      self.region.map(|r| r.parse::<Region>()).transpose()?,
      member_type: self.member_type.parse()?,
      notes:       self.notes,
      country_id:  self.country_id,
    })
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// Request body for `PATCH /teams/{code}`. The code itself cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamUpdate {
  pub name:        Option<String>,
  #[serde(default, deserialize_with = "nullable")]
  pub region:      Option<Option<String>>,
  pub member_type: Option<String>,
  #[serde(default, deserialize_with = "nullable")]
  pub notes:       Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable")]
  pub country_id:  Option<Option<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPatch {
  pub name:        Option<String>,
  pub region:      Option<Option<Region>>,
  pub member_type: Option<MemberType>,
  pub notes:       Option<Option<String>>,
  pub country_id:  Option<Option<i64>>,
}

impl Validate for TeamUpdate {
  type Output = TeamPatch;

  fn validate(self) -> Result<TeamPatch> {
    let region = match self.region {
      Some(Some(r)) => Some(Some(r.parse::<Region>()?)),
      Some(None) => Some(None),
      None => None,
    };
    Ok(TeamPatch {
      name: self.name,
      region,
      member_type: self.member_type.map(|m| m.parse::<MemberType>()).transpose()?,
      notes: self.notes,
      country_id: self.country_id,
    })
  }
}

/// Full replacement of everything but the code.
impl From<Team> for TeamPatch {
  fn from(t: Team) -> Self {
    Self {
      name:        Some(t.name),
      region:      Some(t.region),
      member_type: Some(t.member_type),
      notes:       Some(t.notes),
      country_id:  Some(t.country_id),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn create(body: serde_json::Value) -> Result<Team> {
    serde_json::from_value::<TeamCreate>(body).unwrap().validate()
  }

  #[test]
  fn region_is_optional() {
    let team = create(serde_json::json!({
      "code": "RPT", "name": "Refugee Paralympic Team", "member_type": "team"
    }))
    .unwrap();
    assert_eq!(team.region, None);
    assert_eq!(team.member_type, MemberType::Team);
  }

  #[test]
  fn invalid_region_is_rejected() {
    let err = create(serde_json::json!({
      "code": "ATL", "name": "Atlantis", "region": "Atlantic", "member_type": "country"
    }))
    .unwrap_err();
    assert_eq!(err.field(), "region");
    assert_eq!(err.allowed(), Some(Region::ALLOWED));
  }

  #[test]
  fn invalid_member_type_is_rejected() {
    let err = create(serde_json::json!({
      "code": "GBR", "name": "Great Britain", "member_type": "nation"
    }))
    .unwrap_err();
    assert_eq!(err.field(), "member_type");
  }

  #[test]
  fn update_keeps_code_and_unsent_fields() {
    let team = create(serde_json::json!({
      "code": "URS", "name": "Soviet Union", "region": "Europe",
      "member_type": "country", "notes": "1988 only"
    }))
    .unwrap();
    let patch = serde_json::from_value::<TeamUpdate>(serde_json::json!({
      "member_type": "dissolved", "region": null
    }))
    .unwrap()
    .validate()
    .unwrap();

    let merged = team.merged(patch);
    assert_eq!(merged.code, "URS");
    assert_eq!(merged.member_type, MemberType::Dissolved);
    assert_eq!(merged.region, None);
    assert_eq!(merged.notes.as_deref(), Some("1988 only"));
  }
}
