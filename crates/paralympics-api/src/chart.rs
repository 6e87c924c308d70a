//! Handler for `GET /all`: the Games ⋈ Host ⋈ Country rows used for charts.

use std::sync::Arc;

use axum::{Json, extract::State};
use paralympics_core::{chart::ChartRow, store::ParalympicsStore};

use crate::error::ApiError;

/// `GET /all`
pub async fn handler<S: ParalympicsStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ChartRow>>, ApiError> {
  let rows = store.chart_data().await.map_err(ApiError::store)?;
  Ok(Json(rows))
}
