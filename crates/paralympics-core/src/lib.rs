//! Domain types and trait definitions for the Paralympics API.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! (`paralympics-store-sqlite`) and the HTTP layer (`paralympics-api`) both
//! depend on it.

pub mod chart;
pub mod disability;
pub mod error;
pub mod games;
pub mod patch;
pub mod place;
pub mod quiz;
pub mod store;
pub mod team;
pub mod validate;

pub use error::{Result, ValidationError};
pub use validate::Validate;
