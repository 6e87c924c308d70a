//! Error types for `paralympics-core`.

use thiserror::Error;

/// A request field that failed one of the validation rules.
///
/// Raised before anything reaches the store, so a failed validation never
/// leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{field}: {value:?} is not one of {allowed:?}")]
  NotAllowed {
    field:   &'static str,
    value:   String,
    allowed: &'static [&'static str],
  },

  #[error("{field}: {value} must be between {min} and {max}")]
  OutOfRange {
    field: &'static str,
    value: i64,
    min:   i64,
    max:   i64,
  },

  #[error("{field}: {value:?} is not an integer")]
  NotAnInteger { field: &'static str, value: String },
}

impl ValidationError {
  /// Name of the offending request field.
  pub fn field(&self) -> &'static str {
    match self {
      Self::NotAllowed { field, .. }
      | Self::OutOfRange { field, .. }
      | Self::NotAnInteger { field, .. } => *field,
    }
  }

  /// The accepted values, for enumerated fields.
  pub fn allowed(&self) -> Option<&'static [&'static str]> {
    match self {
      Self::NotAllowed { allowed, .. } => Some(*allowed),
      _ => None,
    }
  }
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
