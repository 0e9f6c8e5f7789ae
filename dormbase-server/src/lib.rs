//! dormbase-server: HTTP surface and MySQL data access for dormbase.
//!
//! CRUD endpoints over the dormitory schema (buildings, floors, rooms,
//! departments, students, audit logs) plus the occupancy report, which is
//! backed by the `generate_occupancy_report` stored procedure. The store's
//! procedures own the business rules; this crate validates shallowly,
//! pre-checks room assignments, and maps rows to the wire.

pub mod config;
pub mod db;
pub mod http;
pub mod state;

pub use config::DbConfig;
pub use http::{run_server, ApiError, ServerConfig};
pub use state::AppState;
