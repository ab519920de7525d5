//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    service::order_status::{guard::TransitionPolicy, OrderStatusService},
    util::clock::Clock,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn Clock>` is a reference-counted pointer
/// - `TransitionPolicy` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Time source for status event timestamps and overdue detection.
    pub clock: Arc<dyn Clock>,

    /// How order status transitions without listed roles are treated.
    pub transition_policy: TransitionPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `clock` - Time source
    /// - `transition_policy` - Policy for transitions without listed roles
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        clock: Arc<dyn Clock>,
        transition_policy: TransitionPolicy,
    ) -> Self {
        Self {
            db,
            clock,
            transition_policy,
        }
    }

    /// Order status service backed by the shared connection pool.
    pub fn order_status_service(&self) -> OrderStatusService<'_, DatabaseConnection> {
        OrderStatusService::new(&self.db, self.clock.as_ref(), self.transition_policy)
    }
}
