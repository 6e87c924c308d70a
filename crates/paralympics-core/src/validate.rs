//! Field-level validation rules and the enumerated field types.
//!
//! Request payloads arrive as loosely-typed wire structs (`GamesCreate`,
//! `TeamUpdate`, ...). [`Validate::validate`] turns each one into the
//! strongly-typed value the store accepts, or fails with a
//! [`ValidationError`] naming the field.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Result, ValidationError};

/// Conversion from a raw request payload into a validated value.
pub trait Validate {
  type Output;

  fn validate(self) -> Result<Self::Output>;
}

// ─── Event type ──────────────────────────────────────────────────────────────

/// Season of a Games edition. Parsing is case-insensitive; the stored and
/// serialised form is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
  Winter,
  Summer,
}

impl EventType {
  pub const ALLOWED: &'static [&'static str] = &["winter", "summer"];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Winter => "winter",
      Self::Summer => "summer",
    }
  }
}

impl FromStr for EventType {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_lowercase().as_str() {
      "winter" => Ok(Self::Winter),
      "summer" => Ok(Self::Summer),
      _ => Err(ValidationError::NotAllowed {
        field:   "event_type",
        value:   s.to_owned(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl fmt::Display for EventType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

// ─── Region ──────────────────────────────────────────────────────────────────

/// Continent a team belongs to. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
  Asia,
  Europe,
  Africa,
  America,
  Oceania,
}

impl Region {
  pub const ALLOWED: &'static [&'static str] =
    &["Asia", "Europe", "Africa", "America", "Oceania"];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Asia => "Asia",
      Self::Europe => "Europe",
      Self::Africa => "Africa",
      Self::America => "America",
      Self::Oceania => "Oceania",
    }
  }
}

impl FromStr for Region {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "Asia" => Ok(Self::Asia),
      "Europe" => Ok(Self::Europe),
      "Africa" => Ok(Self::Africa),
      "America" => Ok(Self::America),
      "Oceania" => Ok(Self::Oceania),
      _ => Err(ValidationError::NotAllowed {
        field:   "region",
        value:   s.to_owned(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

// ─── Member type ─────────────────────────────────────────────────────────────

/// How a team is constituted. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
  Country,
  Team,
  Dissolved,
  Construct,
}

impl MemberType {
  pub const ALLOWED: &'static [&'static str] =
    &["country", "team", "dissolved", "construct"];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Country => "country",
      Self::Team => "team",
      Self::Dissolved => "dissolved",
      Self::Construct => "construct",
    }
  }
}

impl FromStr for MemberType {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "country" => Ok(Self::Country),
      "team" => Ok(Self::Team),
      "dissolved" => Ok(Self::Dissolved),
      "construct" => Ok(Self::Construct),
      _ => Err(ValidationError::NotAllowed {
        field:   "member_type",
        value:   s.to_owned(),
        allowed: Self::ALLOWED,
      }),
    }
  }
}

impl fmt::Display for MemberType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

// ─── Year ────────────────────────────────────────────────────────────────────

pub const MIN_YEAR: i64 = 1960;
pub const MAX_YEAR: i64 = 9999;

/// A year as sent by a client: a JSON integer, an integral float such as
/// `2021.0`, or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
  Int(i64),
  Float(f64),
  Text(String),
}

/// Coerce `raw` to an integer and check it lies in `[MIN_YEAR, MAX_YEAR]`.
pub fn year(raw: IntOrString) -> Result<i32> {
  let value = match raw {
    IntOrString::Int(n) => n,
    IntOrString::Float(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
    IntOrString::Float(f) => {
      return Err(ValidationError::NotAnInteger { field: "year", value: f.to_string() });
    }
    IntOrString::Text(s) => s.trim().parse::<i64>().map_err(|_| {
      ValidationError::NotAnInteger { field: "year", value: s.clone() }
    })?,
  };
  if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
    return Err(ValidationError::OutOfRange {
      field: "year",
      value,
      min: MIN_YEAR,
      max: MAX_YEAR,
    });
  }
  // Bounded above by MAX_YEAR, so the cast cannot truncate.
  Ok(value as i32)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn event_type_is_case_insensitive() {
    assert_eq!("Summer".parse::<EventType>().unwrap(), EventType::Summer);
    assert_eq!("WINTER".parse::<EventType>().unwrap(), EventType::Winter);
    assert_eq!(EventType::Summer.to_string(), "summer");
  }

  #[test]
  fn event_type_rejects_unknown_season() {
    let err = "autumn".parse::<EventType>().unwrap_err();
    assert_eq!(err.field(), "event_type");
    assert_eq!(err.allowed(), Some(EventType::ALLOWED));
  }

  #[test]
  fn region_is_case_sensitive() {
    assert_eq!("Oceania".parse::<Region>().unwrap(), Region::Oceania);
    let err = "asia".parse::<Region>().unwrap_err();
    assert_eq!(err.field(), "region");
  }

  #[test]
  fn member_type_rejects_unknown() {
    assert_eq!("dissolved".parse::<MemberType>().unwrap(), MemberType::Dissolved);
    let err = "Country".parse::<MemberType>().unwrap_err();
    assert_eq!(err.allowed(), Some(MemberType::ALLOWED));
  }

  #[test]
  fn year_bounds_are_inclusive() {
    assert_eq!(year(IntOrString::Int(1960)).unwrap(), 1960);
    assert_eq!(year(IntOrString::Int(9999)).unwrap(), 9999);
    assert!(matches!(
      year(IntOrString::Int(1959)),
      Err(ValidationError::OutOfRange { value: 1959, .. })
    ));
    assert!(matches!(
      year(IntOrString::Int(10_000)),
      Err(ValidationError::OutOfRange { .. })
    ));
  }

  #[test]
  fn year_coerces_numeric_strings() {
    assert_eq!(year(IntOrString::Text(" 2021 ".into())).unwrap(), 2021);
    let err = year(IntOrString::Text("twenty".into())).unwrap_err();
    assert!(matches!(err, ValidationError::NotAnInteger { field: "year", .. }));
  }

  #[test]
  fn year_accepts_integral_floats_only() {
    assert_eq!(year(IntOrString::Float(2021.0)).unwrap(), 2021);
    let err = year(IntOrString::Float(2021.5)).unwrap_err();
    assert!(matches!(err, ValidationError::NotAnInteger { field: "year", .. }));
    assert!(matches!(
      year(IntOrString::Float(1e12)),
      Err(ValidationError::OutOfRange { .. })
    ));
  }

  #[test]
  fn year_deserialises_from_every_json_form() {
    let parse = |v: serde_json::Value| serde_json::from_value::<IntOrString>(v).unwrap();
    assert_eq!(parse(serde_json::json!(2021)), IntOrString::Int(2021));
    assert_eq!(parse(serde_json::json!(2021.0)), IntOrString::Float(2021.0));
    assert_eq!(parse(serde_json::json!("2021")), IntOrString::Text("2021".into()));
  }
}
