//! Route handlers organized by resource

pub mod audit_logs;
pub mod buildings;
pub mod departments;
pub mod floors;
pub mod health;
pub mod reports;
pub mod rooms;
pub mod students;

use serde::Serialize;

/// Fixed acknowledgement payload for mutations.
///
/// The `message` texts are the ones deployed clients already match on.
/// `rows_affected` appears only on student update/delete, where zero rows
/// is still a success and the count is the caller's only signal.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
}

impl Ack {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            rows_affected: None,
        }
    }

    pub fn with_rows(message: &'static str, rows_affected: u64) -> Self {
        Self {
            message,
            rows_affected: Some(rows_affected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ack_omits_rows_affected() {
        let json = serde_json::to_string(&Ack::new("Building created successfully")).unwrap();
        assert_eq!(json, r#"{"message":"Building created successfully"}"#);
    }

    #[test]
    fn ack_with_rows_carries_the_count() {
        let json =
            serde_json::to_string(&Ack::with_rows("Student deleted successfully", 0)).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Student deleted successfully","rows_affected":0}"#
        );
    }
}
