use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, equipment_status::EquipmentStatusNamesDto},
    server::{error::AppError, state::AppState},
};

/// Tag for grouping equipment status endpoints in OpenAPI documentation
pub static EQUIPMENT_STATUS_TAG: &str = "equipment_status";

/// List all equipment status names.
#[utoipa::path(
    get,
    path = "/api/equipment-statuses",
    tag = EQUIPMENT_STATUS_TAG,
    responses(
        (status = 200, description = "Equipment status names", body = EquipmentStatusNamesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_status_names(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let names = state.order_status_service().equipment_status_names().await?;

    Ok((StatusCode::OK, Json(EquipmentStatusNamesDto { names })))
}
