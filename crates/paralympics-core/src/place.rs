//! Countries and host locations.
//!
//! Neither carries validation rules beyond their JSON shape, so the request
//! bodies deserialise straight into the `New*` and `*Patch` types.

use serde::{Deserialize, Serialize};

use crate::patch::{apply, nullable};

// ─── Country ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub id:           i64,
  pub country_name: String,
}

/// Request body for `POST /countries` and `PUT /countries/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewCountry {
  pub country_name: String,
}

/// Request body for `PATCH /countries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CountryPatch {
  pub country_name: Option<String>,
}

impl NewCountry {
  pub fn with_id(self, id: i64) -> Country {
    Country { id, country_name: self.country_name }
  }
}

impl From<NewCountry> for CountryPatch {
  fn from(c: NewCountry) -> Self { Self { country_name: Some(c.country_name) } }
}

impl Country {
  pub fn merged(mut self, patch: CountryPatch) -> Self {
    apply(&mut self.country_name, patch.country_name);
    self
  }
}

// ─── Host ────────────────────────────────────────────────────────────────────

/// A place that hosted (part of) a Games edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
  pub id:         i64,
  pub place_name: String,
  pub latitude:   Option<f64>,
  pub longitude:  Option<f64>,
  pub country_id: Option<i64>,
}

/// Request body for `POST /hosts` and `PUT /hosts/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewHost {
  pub place_name: String,
  pub latitude:   Option<f64>,
  pub longitude:  Option<f64>,
  pub country_id: Option<i64>,
}

/// Request body for `PATCH /hosts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HostPatch {
  pub place_name: Option<String>,
  #[serde(default, deserialize_with = "nullable")]
  pub latitude:   Option<Option<f64>>,
  #[serde(default, deserialize_with = "nullable")]
  pub longitude:  Option<Option<f64>>,
  #[serde(default, deserialize_with = "nullable")]
  pub country_id: Option<Option<i64>>,
}

impl NewHost {
  pub fn with_id(self, id: i64) -> Host {
    Host {
      id,
      place_name: self.place_name,
      latitude:   self.latitude,
      longitude:  self.longitude,
      country_id: self.country_id,
    }
  }
}

impl From<NewHost> for HostPatch {
  fn from(h: NewHost) -> Self {
    Self {
      place_name: Some(h.place_name),
      latitude:   Some(h.latitude),
      longitude:  Some(h.longitude),
      country_id: Some(h.country_id),
    }
  }
}

impl Host {
  pub fn merged(mut self, patch: HostPatch) -> Self {
    apply(&mut self.place_name, patch.place_name);
    apply(&mut self.latitude, patch.latitude);
    apply(&mut self.longitude, patch.longitude);
    apply(&mut self.country_id, patch.country_id);
    self
  }
}

/// Request body for `PUT /games/{id}/host`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HostLink {
  pub host_id: i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn host_patch_can_clear_country() {
    let host = NewHost {
      place_name: "Stoke Mandeville".into(),
      latitude:   Some(51.79),
      longitude:  Some(-0.79),
      country_id: Some(3),
    }
    .with_id(7);

    let patch: HostPatch = serde_json::from_str(r#"{"country_id":null}"#).unwrap();
    let merged = host.clone().merged(patch);
    assert_eq!(merged.country_id, None);
    assert_eq!(merged.latitude, host.latitude);
    assert_eq!(merged.place_name, host.place_name);
  }
}
