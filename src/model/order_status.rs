use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for moving an order to a new status.
///
/// `status_name` is kept as a raw string so that a missing or unknown value is reported as
/// a 400 with a readable message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewOrderStatusDto {
    #[serde(default)]
    pub status_name: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// One entry of an order's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusDto {
    pub id: i32,
    pub order_id: i32,
    pub status_name: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` when the change was made by the system.
    pub changed_by: Option<i32>,
}

/// All order status names known to the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusNamesDto {
    pub names: Vec<String>,
}

/// Orders whose current status is `status_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrdersInStatusDto {
    pub status_name: String,
    pub order_ids: Vec<i32>,
}
