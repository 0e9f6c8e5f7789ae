//! Database layer - connection pool, error classification, repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rows are mapped positionally, matching the column order in the SELECT
//! - Store failures are classified into a closed error set; raw driver text
//!   is logged here and never reaches a response body
//! - Business rules live in the store's procedures; repositories only call
//!   them

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::create_pool;
pub use repos::*;
