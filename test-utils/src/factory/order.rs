//! Order factory for creating test order entities.
//!
//! The factory inserts the order row and its `order_equipment` links only; status
//! history and equipment status records come from their own factories or from
//! `helpers::create_rental`.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, owner.id)
///     .equipment_ids(vec![tent.id, stove.id])
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    description: Option<String>,
    rent_start: DateTime<Utc>,
    rent_end: DateTime<Utc>,
    equipment_ids: Vec<i32>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - description: `Some("Test order")`
    /// - rent period: tomorrow for seven days
    /// - no equipment
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the renting user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let rent_start = Utc::now() + Duration::days(1);
        Self {
            db,
            user_id,
            description: Some("Test order".to_string()),
            rent_start,
            rent_end: rent_start + Duration::days(7),
            equipment_ids: Vec::new(),
        }
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn rent_period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.rent_start = start;
        self.rent_end = end;
        self
    }

    /// Equipment to link through `order_equipment`.
    pub fn equipment_ids(mut self, equipment_ids: Vec<i32>) -> Self {
        self.equipment_ids = equipment_ids;
        self
    }

    /// Builds and inserts the order and its equipment links.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            description: ActiveValue::Set(self.description),
            rent_start: ActiveValue::Set(self.rent_start),
            rent_end: ActiveValue::Set(self.rent_end),
            status_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for equipment_id in self.equipment_ids {
            entity::order_equipment::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                equipment_id: ActiveValue::Set(equipment_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an order with default values and no equipment.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}
