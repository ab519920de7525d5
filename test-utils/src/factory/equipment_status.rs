//! Equipment status factory for creating test equipment status records.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting equipment status records.
pub struct EquipmentStatusFactory<'a> {
    db: &'a DatabaseConnection,
    equipment_id: i32,
    status: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    order_id: Option<i32>,
}

impl<'a> EquipmentStatusFactory<'a> {
    /// Creates a new EquipmentStatusFactory with default values.
    ///
    /// Defaults:
    /// - status: `"Booked"`
    /// - period: tomorrow for seven days
    /// - order_id: `None`
    pub fn new(db: &'a DatabaseConnection, equipment_id: i32) -> Self {
        let start_date = Utc::now() + Duration::days(1);
        Self {
            db,
            equipment_id,
            status: "Booked".to_string(),
            start_date,
            end_date: start_date + Duration::days(7),
            order_id: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn period(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn order_id(mut self, order_id: Option<i32>) -> Self {
        self.order_id = order_id;
        self
    }

    /// Builds and inserts the equipment status record.
    ///
    /// # Returns
    /// - `Ok(entity::equipment_status::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::equipment_status::Model, DbErr> {
        entity::equipment_status::ActiveModel {
            id: ActiveValue::NotSet,
            equipment_id: ActiveValue::Set(self.equipment_id),
            status: ActiveValue::Set(self.status),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            order_id: ActiveValue::Set(self.order_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Booked` equipment status record attached to `order_id`.
pub async fn create_equipment_status(
    db: &DatabaseConnection,
    equipment_id: i32,
    order_id: i32,
) -> Result<entity::equipment_status::Model, DbErr> {
    EquipmentStatusFactory::new(db, equipment_id)
        .order_id(Some(order_id))
        .build()
        .await
}
