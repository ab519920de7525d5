//! Route table, OpenAPI document and the layer stack around it.

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{equipment_status, order_status},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rental backend", description = "Order and equipment status API"),
    tags(
        (name = "order_status", description = "Order status history and transitions"),
        (name = "equipment_status", description = "Equipment status vocabulary")
    )
)]
struct ApiDoc;

/// API routes together with the OpenAPI document generated from their annotations.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            order_status::add_order_status,
            order_status::get_order_status_history
        ))
        .routes(routes!(order_status::get_current_order_status))
        .routes(routes!(order_status::get_order_status_names))
        .routes(routes!(order_status::get_orders_in_status))
        .routes(routes!(equipment_status::get_equipment_status_names))
        .split_for_parts()
}

/// Builds the application router.
///
/// Layers, outermost first: request tracing, request timeout, sessions. A request that
/// hits the timeout is dropped along with any open database transaction, which rolls back.
///
/// # Arguments
/// - `state` - Shared application state
/// - `session` - Session layer backed by the SQLite session store
/// - `request_timeout` - Maximum time a request may take
pub fn router(
    state: AppState,
    session: SessionManagerLayer<SqliteStore>,
    request_timeout: Duration,
) -> Router {
    let (api, openapi) = api_router();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(session)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
