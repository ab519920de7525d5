//! Rental Backend Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the rental
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed factories for users, equipment, orders and statuses
//! - **fixture**: In-memory entity models that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn closes_order() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_order_status_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let owner = factory::create_user(db).await?;
//!     let rental = factory::helpers::create_rental(db, owner.id, 2).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
