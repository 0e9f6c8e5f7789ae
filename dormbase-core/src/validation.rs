//! Shallow request validation: "required" means present and
//! non-empty/non-zero.
//!
//! Referential validity (does `building_id` exist?) is the store's job and
//! surfaces through the constraint error kinds instead.

use thiserror::Error;

/// Rejection produced before any store call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required text field missing or empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Required integer field missing or zero.
    #[error("{field} must be a non-zero integer")]
    Zero { field: &'static str },

    /// Path id segment that does not parse as an integer.
    #[error("{field} must be an integer, got '{value}'")]
    NotAnId { field: &'static str, value: String },
}

/// Require a non-empty text field.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(())
    }
}

/// Require a non-zero integer field.
///
/// Zero doubles as "absent" in this API's integer fields. Negative keys pass
/// and bounce off the store's constraints like any other dangling reference.
pub fn require_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value == 0 {
        Err(ValidationError::Zero { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_rejected() {
        let err = require_text("building_name", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "building_name" });
        assert_eq!(err.to_string(), "building_name cannot be empty");
    }

    #[test]
    fn present_text_accepted() {
        assert!(require_text("gender_type", "Female").is_ok());
        // Whitespace counts as present; the store stores what it gets.
        assert!(require_text("gender_type", " ").is_ok());
    }

    #[test]
    fn zero_id_rejected() {
        let err = require_id("room_id", 0).unwrap_err();
        assert_eq!(err, ValidationError::Zero { field: "room_id" });
        assert_eq!(err.to_string(), "room_id must be a non-zero integer");
    }

    #[test]
    fn nonzero_ids_accepted() {
        assert!(require_id("room_id", 7).is_ok());
        // Negative passes shallow validation; the store decides.
        assert!(require_id("room_id", -7).is_ok());
    }

    #[test]
    fn bad_path_id_message() {
        let err = ValidationError::NotAnId {
            field: "id",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "id must be an integer, got 'abc'");
    }
}
