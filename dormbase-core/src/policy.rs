//! Room-assignment rule, pre-checked in process.
//!
//! The stored procedure `assign_student_to_room` is the authority on
//! room/gender/capacity rules. This seam runs the same rule ahead of the
//! call so violations fail fast with a typed error and the rule can be
//! exercised without a live store. The check is advisory: the snapshot read
//! and the procedure call are not atomic, and the procedure revalidates.

use thiserror::Error;

/// Point-in-time view of a room, fetched just before an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSnapshot {
    /// Beds in the room.
    pub capacity: i64,
    /// Students currently assigned to the room.
    pub occupants: i64,
    /// Gender designation of the building the assignment targets.
    pub building_gender: String,
}

/// Why an assignment was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("room is full ({occupants}/{capacity})")]
    RoomFull { capacity: i64, occupants: i64 },

    #[error("building is designated '{building}', cannot assign a '{gender}' student")]
    GenderMismatch { building: String, gender: String },
}

/// The assignment rule evaluated before `assign_student_to_room`.
///
/// Implementations must be pure over their inputs; handlers call this on the
/// request path.
pub trait AssignmentPolicy: Send + Sync {
    fn evaluate(&self, gender: &str, room: &RoomSnapshot) -> Result<(), PolicyViolation>;
}

/// Production rule: a room admits a student when it has a free bed and the
/// building's gender designation matches (or the building is mixed).
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseRules;

/// Building designations that admit any gender, compared case-insensitively.
const MIXED_DESIGNATIONS: [&str; 5] = ["mixed", "coed", "co-ed", "any", "all"];

impl HouseRules {
    fn is_mixed(designation: &str) -> bool {
        MIXED_DESIGNATIONS
            .iter()
            .any(|m| designation.eq_ignore_ascii_case(m))
    }
}

impl AssignmentPolicy for HouseRules {
    fn evaluate(&self, gender: &str, room: &RoomSnapshot) -> Result<(), PolicyViolation> {
        if room.occupants >= room.capacity {
            return Err(PolicyViolation::RoomFull {
                capacity: room.capacity,
                occupants: room.occupants,
            });
        }

        if !Self::is_mixed(&room.building_gender)
            && !room.building_gender.eq_ignore_ascii_case(gender)
        {
            return Err(PolicyViolation::GenderMismatch {
                building: room.building_gender.clone(),
                gender: gender.to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: i64, occupants: i64, gender: &str) -> RoomSnapshot {
        RoomSnapshot {
            capacity,
            occupants,
            building_gender: gender.to_owned(),
        }
    }

    #[test]
    fn admits_matching_gender_with_free_bed() {
        assert!(HouseRules.evaluate("Female", &room(4, 3, "Female")).is_ok());
    }

    #[test]
    fn rejects_full_room() {
        let err = HouseRules.evaluate("Female", &room(4, 4, "Female")).unwrap_err();
        assert_eq!(
            err,
            PolicyViolation::RoomFull {
                capacity: 4,
                occupants: 4
            }
        );
    }

    #[test]
    fn zero_capacity_room_admits_nobody() {
        let err = HouseRules.evaluate("Male", &room(0, 0, "Male")).unwrap_err();
        assert!(matches!(err, PolicyViolation::RoomFull { .. }));
    }

    #[test]
    fn rejects_gender_mismatch() {
        let err = HouseRules.evaluate("Male", &room(4, 0, "Female")).unwrap_err();
        assert_eq!(
            err,
            PolicyViolation::GenderMismatch {
                building: "Female".into(),
                gender: "Male".into(),
            }
        );
    }

    #[test]
    fn gender_comparison_is_case_insensitive() {
        assert!(HouseRules.evaluate("male", &room(2, 1, "MALE")).is_ok());
    }

    #[test]
    fn mixed_buildings_admit_any_gender() {
        for designation in ["Mixed", "coed", "Co-Ed", "any", "ALL"] {
            assert!(
                HouseRules.evaluate("Female", &room(2, 0, designation)).is_ok(),
                "designation {designation:?} should admit"
            );
        }
    }

    #[test]
    fn full_room_reported_before_gender() {
        // Both rules fail; capacity wins so the caller frees a bed first.
        let err = HouseRules.evaluate("Male", &room(2, 2, "Female")).unwrap_err();
        assert!(matches!(err, PolicyViolation::RoomFull { .. }));
    }

    #[test]
    fn violation_messages_read_well() {
        let full = PolicyViolation::RoomFull {
            capacity: 2,
            occupants: 2,
        };
        assert_eq!(full.to_string(), "room is full (2/2)");

        let mismatch = PolicyViolation::GenderMismatch {
            building: "Female".into(),
            gender: "Male".into(),
        };
        assert_eq!(
            mismatch.to_string(),
            "building is designated 'Female', cannot assign a 'Male' student"
        );
    }
}
