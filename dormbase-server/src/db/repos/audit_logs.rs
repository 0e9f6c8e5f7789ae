//! Audit-log repository
//!
//! The audit trail is written by store triggers and procedures; this side
//! only reads it.

use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use dormbase_core::AuditLog;

use crate::db::DbError;

pub struct AuditLogRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AuditLogRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List the audit trail in store order. `changed_by` and `details` are
    /// nullable; NULL decodes to the empty string.
    pub async fn list(&self) -> Result<Vec<AuditLog>, DbError> {
        let rows = sqlx::query(
            "SELECT log_id, table_name, operation, record_id, change_time, changed_by, details FROM audit_log",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<AuditLog, DbError> {
                Ok(AuditLog {
                    id: row.try_get(0)?,
                    table_name: row.try_get(1)?,
                    operation: row.try_get(2)?,
                    record_id: row.try_get(3)?,
                    change_time: row.try_get::<DateTime<Utc>, _>(4)?,
                    changed_by: row.try_get::<Option<String>, _>(5)?.unwrap_or_default(),
                    details: row.try_get::<Option<String>, _>(6)?.unwrap_or_default(),
                })
            })
            .collect()
    }
}
