//! Order status domain models and parameters.
//!
//! The status history of an order is append-only; the latest event by creation time (ties
//! broken by id) is the order's current status.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{model::order_status::OrderStatusDto, server::model::user::Principal};

/// Closed vocabulary of order statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderStatusName {
    InReview,
    Approved,
    Rejected,
    Prepared,
    InProgress,
    Overdue,
    Blocked,
    Closed,
}

impl OrderStatusName {
    pub const ALL: [OrderStatusName; 8] = [
        OrderStatusName::InReview,
        OrderStatusName::Approved,
        OrderStatusName::Rejected,
        OrderStatusName::Prepared,
        OrderStatusName::InProgress,
        OrderStatusName::Overdue,
        OrderStatusName::Blocked,
        OrderStatusName::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatusName::InReview => "InReview",
            OrderStatusName::Approved => "Approved",
            OrderStatusName::Rejected => "Rejected",
            OrderStatusName::Prepared => "Prepared",
            OrderStatusName::InProgress => "InProgress",
            OrderStatusName::Overdue => "Overdue",
            OrderStatusName::Blocked => "Blocked",
            OrderStatusName::Closed => "Closed",
        }
    }
}

impl fmt::Display for OrderStatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatusName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatusName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// One immutable entry of an order's status history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatusEvent {
    pub id: i32,
    pub order_id: i32,
    pub status: OrderStatusName,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    /// User who made the change, `None` for system transitions.
    pub changed_by: Option<i32>,
}

impl OrderStatusEvent {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(OrderStatusEvent)` - The converted event
    /// - `Err(DbErr::Custom)` - The stored status is not a known order status
    pub fn from_entity(entity: entity::order_status::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<OrderStatusName>().map_err(|value| {
            DbErr::Custom(format!(
                "Invalid order status '{}' stored for event {}",
                value, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            order_id: entity.order_id,
            status,
            comment: entity.comment,
            created_at: entity.created_at,
            changed_by: entity.changed_by,
        })
    }

    pub fn into_dto(self) -> OrderStatusDto {
        OrderStatusDto {
            id: self.id,
            order_id: self.order_id,
            status_name: self.status.to_string(),
            comment: self.comment,
            created_at: self.created_at,
            changed_by: self.changed_by,
        }
    }
}

/// Latest status event of an order together with the order's owner and concurrency version.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentOrderStatus {
    pub event: OrderStatusEvent,
    /// ID of the user who placed the order.
    pub owner_id: i32,
    /// Incremented by every appended status event; used as a compare-and-swap token.
    pub status_version: i32,
}

impl CurrentOrderStatus {
    pub fn status(&self) -> OrderStatusName {
        self.event.status
    }
}

/// Parameters for appending an event to an order's status history.
#[derive(Debug, Clone)]
pub struct AppendOrderStatusParams {
    pub order_id: i32,
    /// Version read together with the current status. The append only succeeds if the
    /// order is still at this version.
    pub expected_version: i32,
    pub status: OrderStatusName,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub changed_by: Option<i32>,
}

/// Parameters for a user-requested status change.
#[derive(Debug, Clone)]
pub struct AddOrderStatusParams {
    pub order_id: i32,
    /// Requested status name exactly as received.
    pub status: String,
    pub comment: Option<String>,
    pub principal: Principal,
}
