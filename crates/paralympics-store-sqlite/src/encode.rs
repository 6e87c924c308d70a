//! Decoding helpers for the enumerated columns.
//!
//! Enumerations are stored as their canonical text form (`"summer"`,
//! `"Europe"`, ...). A value that fails to parse surfaces as a rusqlite
//! conversion error, like any other column type mismatch.

use std::str::FromStr;

use rusqlite::{Row, types::Type};

/// Read column `idx` as text and parse it into `T`.
pub fn parsed<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  let raw: String = row.get(idx)?;
  raw
    .parse()
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Like [`parsed`], for nullable columns.
pub fn parsed_opt<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  let raw: Option<String> = row.get(idx)?;
  raw
    .map(|s| s.parse())
    .transpose()
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
