//! Repository implementations for database access
//!
//! One repository per entity, each borrowing the shared pool. Patterns:
//! - List maps rows positionally in SELECT column order, via `fetch_all` so
//!   cursors are always drained and returned to the pool
//! - Create binds parameters positionally; generated keys are not returned
//! - Business-rule mutations go through the store's procedures

pub mod audit_logs;
pub mod buildings;
pub mod departments;
pub mod floors;
pub mod reports;
pub mod rooms;
pub mod students;

pub use audit_logs::AuditLogRepo;
pub use buildings::BuildingRepo;
pub use departments::DepartmentRepo;
pub use floors::FloorRepo;
pub use reports::ReportRepo;
pub use rooms::RoomRepo;
pub use students::StudentRepo;
