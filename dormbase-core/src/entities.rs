//! Entity records, mapped one-to-one from store rows.
//!
//! Wire field names are fixed: deployed clients were written against the
//! store's column names (`building_id`, `room_number`, ...), so renames stay
//! on the struct rather than leaking into handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dormitory building.
///
/// `gender_type` constrains which students may occupy its rooms; the store
/// procedure enforces the rule, [`crate::policy`] pre-checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    #[serde(rename = "building_id")]
    pub id: i64,
    #[serde(rename = "building_name")]
    pub name: String,
    pub gender_type: String,
}

/// Floor within a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    #[serde(rename = "floor_id")]
    pub id: i64,
    #[serde(rename = "floor_number")]
    pub number: i64,
    pub building_id: i64,
}

/// Room on a floor. `amenities` is free text; a NULL column decodes to `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "room_id")]
    pub id: i64,
    #[serde(rename = "room_number")]
    pub number: i64,
    pub capacity: i64,
    pub amenities: String,
    pub floor_id: i64,
}

/// Academic department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "department_id")]
    pub id: i64,
    #[serde(rename = "department_name")]
    pub name: String,
}

/// Student with their room/department/building assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "student_id")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub room_id: i64,
    pub department_id: i64,
    pub building_id: i64,
}

/// A student assignment before the store has issued a key.
///
/// Doubles as the request body for student create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub room_id: i64,
    pub department_id: i64,
    pub building_id: i64,
}

/// Append-only audit trail entry, written by store triggers and procedures.
/// Read-only through this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(rename = "log_id")]
    pub id: i64,
    pub table_name: String,
    pub operation: String,
    pub record_id: i64,
    pub change_time: DateTime<Utc>,
    pub changed_by: String,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn building_wire_shape() {
        let building = Building {
            id: 3,
            name: "Liyana Hall".into(),
            gender_type: "Female".into(),
        };

        let json = serde_json::to_value(&building).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "building_id": 3,
                "building_name": "Liyana Hall",
                "gender_type": "Female",
            })
        );
    }

    #[test]
    fn student_round_trip() {
        let json = r#"{
            "student_id": 9,
            "first_name": "Abel",
            "last_name": "Tesfaye",
            "gender": "Male",
            "room_id": 4,
            "department_id": 2,
            "building_id": 1
        }"#;

        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, 9);
        assert_eq!(student.first_name, "Abel");

        let back = serde_json::to_value(&student).unwrap();
        assert_eq!(back["student_id"], 9);
        assert_eq!(back["room_id"], 4);
    }

    #[test]
    fn audit_log_timestamp_is_rfc3339() {
        let entry = AuditLog {
            id: 1,
            table_name: "student".into(),
            operation: "INSERT".into(),
            record_id: 9,
            change_time: Utc.with_ymd_and_hms(2024, 5, 14, 8, 30, 0).unwrap(),
            changed_by: "trigger".into(),
            details: "assigned to room 4".into(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["log_id"], 1);
        assert_eq!(json["change_time"], "2024-05-14T08:30:00Z");
    }
}
