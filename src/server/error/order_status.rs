use std::collections::BTreeSet;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::model::{equipment_status::EquipmentStatusName, order_status::OrderStatusName},
};

/// Reasons an order status change or status read is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderStatusError {
    /// The requested status name was empty.
    #[error("Order status is required")]
    EmptyStatus,

    /// The requested status name is not part of the order status vocabulary.
    #[error("Unknown order status '{0}'")]
    UnknownStatus(String),

    /// The order has no status history, which is treated as the order not existing.
    #[error("Order {0} not found")]
    OrderNotFound(i32),

    /// The transition guard refused the change for this user.
    #[error("User {user_id} may not move order {order_id} from {from} to {to}")]
    TransitionDenied {
        user_id: i32,
        order_id: i32,
        from: OrderStatusName,
        to: OrderStatusName,
    },

    /// A non-staff user asked for the status of an order they do not own.
    #[error("User {user_id} may not view order {order_id}")]
    AccessDenied { user_id: i32, order_id: i32 },

    /// Equipment attached to the order is not in the status the target requires.
    ///
    /// `equipment_ids` holds every offending equipment item, not only the first one found.
    #[error("All equipment must be {required} before this change, not ready: {equipment_ids:?}")]
    EquipmentNotReady {
        required: EquipmentStatusName,
        equipment_ids: BTreeSet<i32>,
    },

    /// Another status change for the same order committed between read and write.
    #[error("Order {order_id} status was changed concurrently, retry the request")]
    VersionConflict { order_id: i32 },
}

/// Converts order status errors into HTTP responses.
///
/// - `EmptyStatus` / `UnknownStatus` → 400 Bad Request with the message
/// - `EquipmentNotReady` → 500 Internal Server Error, the message listing every offending item
/// - `OrderNotFound` → 404 Not Found
/// - `TransitionDenied` / `AccessDenied` → 403 Forbidden with a generic message
/// - `VersionConflict` → 409 Conflict
impl IntoResponse for OrderStatusError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyStatus | Self::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            Self::EquipmentNotReady { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::OrderNotFound(_) => StatusCode::NOT_FOUND,
            Self::TransitionDenied { .. } | Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                return (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response();
            }
            Self::VersionConflict { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
