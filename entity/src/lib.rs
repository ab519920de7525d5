//! SeaORM entity models for the rental backend.
//!
//! One module per table. Status names are stored as plain strings that reference the
//! seeded `order_status_name` / `equipment_status_name` tables; conversion into typed
//! status enums happens at the repository boundary in the server crate.

pub mod prelude;

pub mod equipment;
pub mod equipment_status;
pub mod equipment_status_name;
pub mod order;
pub mod order_equipment;
pub mod order_status;
pub mod order_status_name;
pub mod user;
