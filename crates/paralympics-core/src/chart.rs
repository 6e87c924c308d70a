//! The denormalised Games ⋈ Host ⋈ Country projection served to charting
//! clients. Never stored; rebuilt by the store on every read.

use serde::{Deserialize, Serialize};

use crate::validate::EventType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
  pub country_name:   String,
  pub event_type:     EventType,
  pub year:           i32,
  pub place_name:     String,
  pub events:         Option<i32>,
  pub sports:         Option<i32>,
  pub countries:      Option<i32>,
  pub participants_m: Option<i32>,
  pub participants_f: Option<i32>,
  pub participants:   Option<i32>,
  pub start_date:     Option<String>,
  pub end_date:       Option<String>,
  pub latitude:       Option<f64>,
  pub longitude:      Option<f64>,
}
