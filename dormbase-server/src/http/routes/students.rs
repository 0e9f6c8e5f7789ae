//! Student endpoints
//!
//! Assignment runs the advisory policy check on a room snapshot before the
//! `assign_student_to_room` procedure; the procedure stays the authority
//! (the snapshot and the call are not atomic). Update and delete are plain
//! statements whose acks expose the affected-row count, because zero
//! matched rows is deliberately still a success.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use dormbase_core::{require_id, require_text, NewStudent, Student};

use crate::db::{RoomRepo, StudentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::routes::Ack;
use crate::state::AppState;

fn validate(student: &NewStudent) -> Result<(), ApiError> {
    require_text("first_name", &student.first_name)?;
    require_text("last_name", &student.last_name)?;
    require_text("gender", &student.gender)?;
    require_id("room_id", student.room_id)?;
    require_id("department_id", student.department_id)?;
    require_id("building_id", student.building_id)?;
    Ok(())
}

/// GET /students - list all students
async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(state.pool()).list().await?;
    Ok(Json(students))
}

/// POST /students - assign a student to a room
async fn assign_student(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<NewStudent>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    validate(&req)?;

    // Advisory pre-check; a missing room or building means the snapshot is
    // None and the procedure decides alone.
    if let Some(snapshot) = RoomRepo::new(state.pool())
        .snapshot(req.room_id, req.building_id)
        .await?
    {
        state.policy().evaluate(&req.gender, &snapshot)?;
    }

    StudentRepo::new(state.pool()).assign(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Student assigned successfully")),
    ))
}

/// PUT /students/{id} - full replace of a student's mutable fields
async fn update_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(req): ValidJson<NewStudent>,
) -> Result<Json<Ack>, ApiError> {
    validate(&req)?;

    let rows = StudentRepo::new(state.pool()).update(id, &req).await?;
    Ok(Json(Ack::with_rows("Student updated successfully", rows)))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Ack>, ApiError> {
    let rows = StudentRepo::new(state.pool()).delete(id).await?;
    Ok(Json(Ack::with_rows("Student deleted successfully", rows)))
}

/// Student routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(assign_student))
        .route("/students/{id}", put(update_student).delete(delete_student))
}
