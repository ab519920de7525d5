//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Stored status strings are parsed into closed enums here so that the rest of the server
//! never compares raw strings.

pub mod equipment_status;
pub mod order_status;
pub mod user;
