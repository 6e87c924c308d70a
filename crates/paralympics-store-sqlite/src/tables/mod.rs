//! Per-table SQL. Every function takes a `&Connection` so it can run inside
//! the transaction opened by [`SqliteStore`](crate::SqliteStore); none of them
//! commit.

pub mod chart;
pub mod disabilities;
pub mod games;
pub mod places;
pub mod quiz;
pub mod teams;
