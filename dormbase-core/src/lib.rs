//! Domain types for the dormbase dormitory-management backend.
//!
//! Everything here is I/O-free: entity records with their JSON wire shape,
//! shallow request validation, the room-assignment policy, and the generic
//! report row. The server crate supplies HTTP and MySQL on top.

pub mod entities;
pub mod policy;
pub mod report;
pub mod validation;

pub use entities::{AuditLog, Building, Department, Floor, NewStudent, Room, Student};
pub use policy::{AssignmentPolicy, HouseRules, PolicyViolation, RoomSnapshot};
pub use report::{CellValue, ReportRow};
pub use validation::{require_id, require_text, ValidationError};
