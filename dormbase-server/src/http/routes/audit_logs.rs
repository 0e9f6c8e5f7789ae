//! Audit-log endpoints (read-only)

use axum::{extract::State, routing::get, Json, Router};

use dormbase_core::AuditLog;

use crate::db::AuditLogRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /audit_logs - list the audit trail
async fn list_audit_logs(State(state): State<AppState>) -> Result<Json<Vec<AuditLog>>, ApiError> {
    let logs = AuditLogRepo::new(state.pool()).list().await?;
    Ok(Json(logs))
}

/// Audit-log routes
pub fn router() -> Router<AppState> {
    Router::new().route("/audit_logs", get(list_audit_logs))
}
