//! Equipment factory for creating test equipment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test equipment with customizable fields.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> EquipmentFactory<'a> {
    /// Creates a new EquipmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Equipment {id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Equipment {}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the equipment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::equipment::Model)` - Created equipment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an equipment item with default values.
pub async fn create_equipment(db: &DatabaseConnection) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db).build().await
}
