//! Department endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use dormbase_core::{require_text, Department};

use crate::db::DepartmentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::routes::Ack;
use crate::state::AppState;

/// Create department request
#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub department_name: String,
}

/// GET /departments - list all departments
async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let departments = DepartmentRepo::new(state.pool()).list().await?;
    Ok(Json(departments))
}

/// POST /departments - create a department
async fn create_department(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<Ack>), ApiError> {
    require_text("department_name", &req.department_name)?;

    DepartmentRepo::new(state.pool())
        .create(&req.department_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Ack::new("Department created successfully")),
    ))
}

/// Department routes
pub fn router() -> Router<AppState> {
    Router::new().route("/departments", get(list_departments).post(create_department))
}
