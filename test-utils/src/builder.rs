use entity::prelude::*;
use migration::seed::{EQUIPMENT_STATUS_NAMES, ORDER_STATUS_NAMES};
use sea_orm::{
    sea_query::TableCreateStatement, ActiveValue, DatabaseConnection, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Order, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Order)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether the status name reference tables should be filled after creation.
    seed_status_names: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_status_names: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the status name reference tables and seeds them with every known name.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status_name_tables(mut self) -> Self {
        self.seed_status_names = true;
        self.with_table(OrderStatusName)
            .with_table(EquipmentStatusName)
    }

    /// Adds all tables required for order status operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Equipment
    /// - Order
    /// - OrderEquipment
    /// - OrderStatusName / EquipmentStatusName (seeded)
    /// - OrderStatus
    /// - EquipmentStatus
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_status_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_status_tables(self) -> Self {
        self.with_table(User)
            .with_table(Equipment)
            .with_table(Order)
            .with_table(OrderEquipment)
            .with_status_name_tables()
            .with_table(OrderStatus)
            .with_table(EquipmentStatus)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then seeds status names when
    /// requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database, create tables or seed rows
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.seed_status_names {
            seed_status_names(setup.database().await?).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts the same status names the production migration seeds.
async fn seed_status_names(db: &DatabaseConnection) -> Result<(), TestError> {
    OrderStatusName::insert_many(ORDER_STATUS_NAMES.iter().map(|name| {
        entity::order_status_name::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
        }
    }))
    .exec(db)
    .await?;

    EquipmentStatusName::insert_many(EQUIPMENT_STATUS_NAMES.iter().map(|name| {
        entity::equipment_status_name::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
        }
    }))
    .exec(db)
    .await?;

    Ok(())
}
