//! Order status factory for appending test status events.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting order status events.
///
/// Inserting through the factory does not bump `orders.status_version`; tests that
/// exercise optimistic concurrency rely on that to simulate a stale read.
pub struct OrderStatusFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    status: String,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    changed_by: Option<i32>,
}

impl<'a> OrderStatusFactory<'a> {
    /// Creates a new OrderStatusFactory with default values.
    ///
    /// Defaults:
    /// - status: `"InReview"`
    /// - comment: `None`
    /// - created_at: now
    /// - changed_by: `None`
    pub fn new(db: &'a DatabaseConnection, order_id: i32) -> Self {
        Self {
            db,
            order_id,
            status: "InReview".to_string(),
            comment: None,
            created_at: Utc::now(),
            changed_by: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn changed_by(mut self, changed_by: Option<i32>) -> Self {
        self.changed_by = changed_by;
        self
    }

    /// Builds and inserts the status event.
    ///
    /// # Returns
    /// - `Ok(entity::order_status::Model)` - Created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_status::Model, DbErr> {
        entity::order_status::ActiveModel {
            id: ActiveValue::NotSet,
            order_id: ActiveValue::Set(self.order_id),
            status: ActiveValue::Set(self.status),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(self.created_at),
            changed_by: ActiveValue::Set(self.changed_by),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts a status event for `order_id` created now.
pub async fn create_order_status(
    db: &DatabaseConnection,
    order_id: i32,
    status: &str,
) -> Result<entity::order_status::Model, DbErr> {
    OrderStatusFactory::new(db, order_id)
        .status(status)
        .build()
        .await
}
