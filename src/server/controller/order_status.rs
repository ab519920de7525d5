use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        order_status::{NewOrderStatusDto, OrderStatusDto, OrderStatusNamesDto, OrdersInStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order_status::AddOrderStatusParams,
        state::AppState,
    },
};

/// Tag for grouping order status endpoints in OpenAPI documentation
pub static ORDER_STATUS_TAG: &str = "order_status";

/// Move an order to a new status.
///
/// Appends a status event to the order's history and updates the equipment attached to
/// the order as the new status requires.
///
/// # Access Control
/// - Order owner - May close an order that is in review, approved or prepared
/// - `Manager` / `Operator` / `Admin` - According to the transition table
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `order_id` - ID of the order to change
/// - `payload` - Requested status name and optional comment
///
/// # Returns
/// - `200 OK` - The appended status event
/// - `400 Bad Request` - Empty or unknown status
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Transition not permitted for this user
/// - `404 Not Found` - Order has no status history
/// - `409 Conflict` - The order's status changed concurrently
/// - `500 Internal Server Error` - Equipment not ready (body lists the items) or database error
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/statuses",
    tag = ORDER_STATUS_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = NewOrderStatusDto,
    responses(
        (status = 200, description = "Status changed", body = OrderStatusDto),
        (status = 400, description = "Empty or unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Transition not permitted", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Concurrent status change", body = ErrorDto),
        (status = 500, description = "Equipment not ready, or internal server error", body = ErrorDto)
    ),
)]
pub async fn add_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
    Json(payload): Json<NewOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = state
        .order_status_service()
        .add_status(AddOrderStatusParams {
            order_id,
            status: payload.status_name,
            comment: payload.comment,
            principal: user.principal(),
        })
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Get the status history of an order.
///
/// # Access Control
/// - Order owner, or any staff role
///
/// # Returns
/// - `200 OK` - Events oldest first
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User neither owns the order nor is staff
/// - `404 Not Found` - Order has no status history
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/statuses",
    tag = ORDER_STATUS_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Status history", body = Vec<OrderStatusDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to view this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_status_history(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let history = state
        .order_status_service()
        .history(order_id, &user.principal())
        .await?;

    let history: Vec<OrderStatusDto> = history.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(history)))
}

/// Get the current status of an order.
///
/// # Access Control
/// - Order owner, or any staff role
#[utoipa::path(
    get,
    path = "/api/orders/{order_id}/status",
    tag = ORDER_STATUS_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Latest status event", body = OrderStatusDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to view this order", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let event = state
        .order_status_service()
        .current_status(order_id, &user.principal())
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// List all order status names.
#[utoipa::path(
    get,
    path = "/api/order-statuses",
    tag = ORDER_STATUS_TAG,
    responses(
        (status = 200, description = "Order status names", body = OrderStatusNamesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_status_names(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let names = state.order_status_service().all_status_names().await?;

    Ok((StatusCode::OK, Json(OrderStatusNamesDto { names })))
}

/// List the orders currently in a status.
///
/// # Access Control
/// - `Manager` / `Operator` / `Admin`
#[utoipa::path(
    get,
    path = "/api/order-statuses/{status_name}/orders",
    tag = ORDER_STATUS_TAG,
    params(
        ("status_name" = String, Path, description = "Order status name")
    ),
    responses(
        (status = 200, description = "IDs of orders in the status", body = OrdersInStatusDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders_in_status(
    State(state): State<AppState>,
    session: Session,
    Path(status_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let order_ids = state
        .order_status_service()
        .orders_in_status(&status_name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(OrdersInStatusDto {
            status_name,
            order_ids,
        }),
    ))
}
