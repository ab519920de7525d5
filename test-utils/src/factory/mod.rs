//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database; dependencies
//! (owners, equipment) are passed in explicitly so foreign keys line up.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let owner = factory::create_user(db).await?;
//!     let manager = factory::user::UserFactory::new(db).role("Manager").build().await?;
//!
//!     // Order in review with two booked equipment items
//!     let rental = factory::helpers::create_rental(db, owner.id, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `equipment` - Create equipment entities
//! - `order` - Create order entities and their equipment links
//! - `order_status` - Append order status events
//! - `equipment_status` - Create equipment status records
//! - `helpers` - Whole rentals (order + history + equipment + statuses) in one call

pub mod equipment;
pub mod equipment_status;
pub mod helpers;
pub mod order;
pub mod order_status;
pub mod user;

pub use equipment::create_equipment;
pub use equipment_status::create_equipment_status;
pub use order::create_order;
pub use order_status::create_order_status;
pub use user::create_user;
