//! Floor endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use dormbase_core::{require_id, Floor};

use crate::db::FloorRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::routes::Ack;
use crate::state::AppState;

/// Create floor request
#[derive(Deserialize)]
pub struct CreateFloorRequest {
    pub floor_number: i64,
    pub building_id: i64,
}

/// GET /floors - list all floors
async fn list_floors(State(state): State<AppState>) -> Result<Json<Vec<Floor>>, ApiError> {
    let floors = FloorRepo::new(state.pool()).list().await?;
    Ok(Json(floors))
}

/// POST /floors - create a floor
async fn create_floor(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateFloorRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    require_id("floor_number", req.floor_number)?;
    require_id("building_id", req.building_id)?;

    FloorRepo::new(state.pool())
        .create(req.floor_number, req.building_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Floor created successfully")),
    ))
}

/// Floor routes
pub fn router() -> Router<AppState> {
    Router::new().route("/floors", get(list_floors).post(create_floor))
}
