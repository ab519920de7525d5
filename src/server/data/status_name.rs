//! Reference vocabularies seeded by the migrations.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct StatusNameRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatusNameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all order status names, alphabetically.
    pub async fn get_order_status_names(&self) -> Result<Vec<String>, DbErr> {
        Ok(entity::prelude::OrderStatusName::find()
            .order_by_asc(entity::order_status_name::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.name)
            .collect())
    }

    /// Gets all equipment status names, alphabetically.
    pub async fn get_equipment_status_names(&self) -> Result<Vec<String>, DbErr> {
        Ok(entity::prelude::EquipmentStatusName::find()
            .order_by_asc(entity::equipment_status_name::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.name)
            .collect())
    }
}
