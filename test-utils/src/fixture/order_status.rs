//! Order status fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::order_status;

/// Default order ID the fixture events belong to.
pub const DEFAULT_ORDER_ID: i32 = 1;

/// Creates an `InReview` order status event model.
///
/// # Default Values
/// - id: `1`
/// - order_id: `1`
/// - status: `"InReview"`
/// - comment: `None`
/// - created_at: `2023-02-01T09:00:00Z`
/// - changed_by: `Some(1)`
pub fn entity() -> order_status::Model {
    entity_builder().build()
}

/// Creates an order status entity builder for customization.
pub fn entity_builder() -> OrderStatusEntityBuilder {
    OrderStatusEntityBuilder {
        model: order_status::Model {
            id: 1,
            order_id: DEFAULT_ORDER_ID,
            status: "InReview".to_string(),
            comment: None,
            created_at: Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap(),
            changed_by: Some(1),
        },
    }
}

/// Builder for order status entity models.
pub struct OrderStatusEntityBuilder {
    model: order_status::Model,
}

impl OrderStatusEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn order_id(mut self, order_id: i32) -> Self {
        self.model.order_id = order_id;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.model.comment = comment;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.model.created_at = created_at;
        self
    }

    pub fn changed_by(mut self, changed_by: Option<i32>) -> Self {
        self.model.changed_by = changed_by;
        self
    }

    pub fn build(self) -> order_status::Model {
        self.model
    }
}
