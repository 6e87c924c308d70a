//! Helpers shared by the partial-update (`*Patch`) types.
//!
//! A patch field is `None` when the client did not send it. Fields that are
//! nullable on the entity are `Option<Option<T>>` so that an explicit `null`
//! (`Some(None)`) clears the value, while an absent field leaves it alone.

use serde::{Deserialize, Deserializer};

/// Serde adapter for nullable patch fields. Pair with `#[serde(default)]` so
/// an absent field becomes `None`; a present field (including `null`) is
/// wrapped in `Some`.
pub fn nullable<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Option::<T>::deserialize(de).map(Some)
}

/// Overwrite `target` with `update` if the client supplied it.
pub fn apply<T>(target: &mut T, update: Option<T>) {
  if let Some(value) = update {
    *target = value;
  }
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  #[derive(Deserialize)]
  struct Notes {
    #[serde(default, deserialize_with = "super::nullable")]
    notes: Option<Option<String>>,
  }

  #[test]
  fn absent_null_and_value_are_distinct() {
    let absent: Notes = serde_json::from_str("{}").unwrap();
    let null: Notes = serde_json::from_str(r#"{"notes":null}"#).unwrap();
    let value: Notes = serde_json::from_str(r#"{"notes":"x"}"#).unwrap();
    assert_eq!(absent.notes, None);
    assert_eq!(null.notes, Some(None));
    assert_eq!(value.notes, Some(Some("x".to_owned())));
  }

  #[test]
  fn apply_only_touches_supplied_values() {
    let mut n = 1;
    super::apply(&mut n, None);
    assert_eq!(n, 1);
    super::apply(&mut n, Some(2));
    assert_eq!(n, 2);
  }
}
