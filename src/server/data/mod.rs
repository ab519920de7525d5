//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories use SeaORM entity models internally and return domain
//! models at the boundary. Order status repositories are generic over `ConnectionTrait` so
//! the same queries run on a pooled connection or inside a transaction; `store` wires them
//! to the order status engine's store traits.

pub mod equipment_status;
pub mod order_status;
pub mod status_name;
pub mod store;
pub mod user;

#[cfg(test)]
mod test;
