//! Building endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use dormbase_core::{require_text, Building};

use crate::db::BuildingRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::routes::Ack;
use crate::state::AppState;

/// Create building request
#[derive(Deserialize)]
pub struct CreateBuildingRequest {
    pub building_name: String,
    pub gender_type: String,
}

/// GET /buildings - list all buildings
async fn list_buildings(State(state): State<AppState>) -> Result<Json<Vec<Building>>, ApiError> {
    let buildings = BuildingRepo::new(state.pool()).list().await?;
    Ok(Json(buildings))
}

/// POST /buildings - create a building
async fn create_building(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    require_text("building_name", &req.building_name)?;
    require_text("gender_type", &req.gender_type)?;

    BuildingRepo::new(state.pool())
        .create(&req.building_name, &req.gender_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Building created successfully")),
    ))
}

/// Building routes
pub fn router() -> Router<AppState> {
    Router::new().route("/buildings", get(list_buildings).post(create_building))
}
