//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod equipment_status;
pub mod order_status;
