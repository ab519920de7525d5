//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the data layer. They work with domain
//! models rather than DTOs or entity models and own transaction boundaries.

pub mod order_status;
