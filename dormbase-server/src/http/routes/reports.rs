//! Reporting endpoints

use axum::{extract::State, routing::get, Json, Router};

use dormbase_core::ReportRow;

use crate::db::ReportRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /reports/occupancy - run the occupancy report
///
/// The payload shape is whatever columns `generate_occupancy_report`
/// currently returns; an empty dataset is an empty array.
async fn occupancy_report(State(state): State<AppState>) -> Result<Json<Vec<ReportRow>>, ApiError> {
    let rows = ReportRepo::new(state.pool()).occupancy().await?;
    Ok(Json(rows))
}

/// Report routes
pub fn router() -> Router<AppState> {
    Router::new().route("/reports/occupancy", get(occupancy_report))
}
