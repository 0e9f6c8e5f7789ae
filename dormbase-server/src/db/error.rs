//! Store error classification.
//!
//! Every sqlx failure is folded into a small closed set before it can reach
//! a handler. The raw driver error is logged here; the one exception is
//! SQLSTATE '45000', which the store procedures raise with operator-authored
//! messages meant for the caller (room full, gender mismatch, and so on).

use thiserror::Error;

/// SQLSTATE used by `SIGNAL` in the store's procedures.
const SQLSTATE_USER_SIGNAL: &str = "45000";

/// Classified store failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbError {
    /// A stored procedure raised SIGNAL '45000'; the message is user-facing.
    #[error("{message}")]
    Rejected { message: String },

    /// Unique-key violation.
    #[error("a record with these values already exists")]
    Duplicate,

    /// Foreign-key, NOT NULL, or CHECK violation.
    #[error("request violates a data constraint")]
    Constraint,

    /// Connection loss, pool exhaustion, TLS failure.
    #[error("the store is unavailable")]
    Unavailable,

    /// Anything else; detail is in the log, not here.
    #[error("store operation failed")]
    Internal,
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => {
                if db.code().as_deref() == Some(SQLSTATE_USER_SIGNAL) {
                    return Self::Rejected {
                        message: db.message().to_owned(),
                    };
                }
                match db.kind() {
                    sqlx::error::ErrorKind::UniqueViolation => {
                        tracing::warn!(error = %db, "duplicate key");
                        Self::Duplicate
                    }
                    sqlx::error::ErrorKind::ForeignKeyViolation
                    | sqlx::error::ErrorKind::NotNullViolation
                    | sqlx::error::ErrorKind::CheckViolation => {
                        tracing::warn!(error = %db, "constraint violation");
                        Self::Constraint
                    }
                    _ => {
                        tracing::error!(error = %db, "database error");
                        Self::Internal
                    }
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                tracing::error!(error = %err, "store unreachable");
                Self::Unavailable
            }
            _ => {
                tracing::error!(error = %err, "store error");
                Self::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        assert_eq!(DbError::from(sqlx::Error::PoolTimedOut), DbError::Unavailable);
        assert_eq!(DbError::from(sqlx::Error::PoolClosed), DbError::Unavailable);
    }

    #[test]
    fn io_failure_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        assert_eq!(DbError::from(sqlx::Error::Io(io)), DbError::Unavailable);
    }

    #[test]
    fn unclassified_is_internal() {
        assert_eq!(DbError::from(sqlx::Error::RowNotFound), DbError::Internal);
    }

    #[test]
    fn messages_hide_detail_except_rejections() {
        assert_eq!(DbError::Internal.to_string(), "store operation failed");
        assert_eq!(
            DbError::Rejected {
                message: "Room is already at full capacity".into()
            }
            .to_string(),
            "Room is already at full capacity"
        );
    }
}
