//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, convert DTOs to service parameters
//! and domain models back to DTOs. Business rules live in the service layer.

pub mod equipment_status;
pub mod order_status;

#[cfg(test)]
mod test;
