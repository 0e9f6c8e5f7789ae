//! Room endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use dormbase_core::{require_id, require_text, Room};

use crate::db::RoomRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::routes::Ack;
use crate::state::AppState;

/// Create room request. `amenities` is the one field with a silent default.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_number: i64,
    pub capacity: i64,
    #[serde(default)]
    pub amenities: String,
    pub floor_id: i64,
}

/// Amenities replacement request
#[derive(Deserialize)]
pub struct UpdateAmenitiesRequest {
    pub amenities: String,
}

/// GET /rooms - list all rooms
async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = RoomRepo::new(state.pool()).list().await?;
    Ok(Json(rooms))
}

/// POST /rooms - create a room
async fn create_room(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    require_id("room_number", req.room_number)?;
    require_id("capacity", req.capacity)?;
    require_id("floor_id", req.floor_id)?;

    RoomRepo::new(state.pool())
        .create(req.room_number, req.capacity, req.floor_id, &req.amenities)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Room created successfully")),
    ))
}

/// PUT /rooms/{id}/amenities - replace a room's amenities via the store
/// procedure
async fn update_amenities(
    State(state): State<AppState>,
    RecordId(room_id): RecordId,
    ValidJson(req): ValidJson<UpdateAmenitiesRequest>,
) -> Result<Json<Ack>, ApiError> {
    require_text("amenities", &req.amenities)?;

    RoomRepo::new(state.pool())
        .update_amenities(room_id, &req.amenities)
        .await?;

    Ok(Json(Ack::new("Room amenities updated successfully")))
}

/// Room routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{id}/amenities", put(update_amenities))
}
