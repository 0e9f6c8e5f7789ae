//! Application state shared across handlers

use std::sync::Arc;

use sqlx::MySqlPool;

use dormbase_core::{AssignmentPolicy, HouseRules};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: MySqlPool,
    policy: Arc<dyn AssignmentPolicy>,
}

impl AppState {
    /// State with the production assignment policy.
    pub fn new(pool: MySqlPool) -> Self {
        Self::with_policy(pool, Arc::new(HouseRules))
    }

    /// State with a caller-supplied assignment policy (tests, alternate
    /// deployments with different house rules).
    pub fn with_policy(pool: MySqlPool, policy: Arc<dyn AssignmentPolicy>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, policy }),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.inner.pool
    }

    pub fn policy(&self) -> &dyn AssignmentPolicy {
        self.inner.policy.as_ref()
    }
}
