use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::order_status::NewOrderStatusDto,
    server::{
        error::AppError, middleware::session::AuthSession,
        service::order_status::guard::TransitionPolicy, state::AppState,
        util::clock::SystemClock,
    },
};


fn state(db: &DatabaseConnection) -> State<AppState> {
    State(AppState::new(
        db.clone(),
        Arc::new(SystemClock),
        TransitionPolicy::Strict,
    ))
}

fn new_status(status_name: &str) -> Json<NewOrderStatusDto> {
    Json(NewOrderStatusDto {
        status_name: status_name.to_string(),
        comment: None,
    })
}
