//! Error type for `paralympics-store-sqlite`.

use paralympics_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  fn is_conflict(&self) -> bool {
    matches!(
      self,
      Error::Database(tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _)))
        if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
