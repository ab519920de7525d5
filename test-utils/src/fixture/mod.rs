//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests, model conversion tests and in-memory store doubles. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let record = fixture::equipment_status::entity();
//!
//! let in_use = fixture::equipment_status::entity_builder()
//!     .status("InUse")
//!     .build();
//! ```

pub mod equipment_status;
pub mod order_status;
pub mod user;

pub use equipment_status::{
    entity as equipment_status_entity, entity_builder as equipment_status_entity_builder,
};
pub use order_status::{entity as order_status_entity, entity_builder as order_status_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
