use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::equipment_status::{EquipmentStatusRecord, EquipmentStatusUpdate};

pub struct EquipmentStatusRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentStatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the equipment status records created for an order, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<EquipmentStatusRecord>)`: Records of the order, empty if none
    /// - `Err(DbErr)`: Database error or an unknown status stored for a record
    pub async fn get_by_order_id(&self, order_id: i32) -> Result<Vec<EquipmentStatusRecord>, DbErr> {
        entity::prelude::EquipmentStatus::find()
            .filter(entity::equipment_status::Column::OrderId.eq(order_id))
            .order_by_asc(entity::equipment_status::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(EquipmentStatusRecord::from_entity)
            .collect()
    }

    /// Applies a partial update to one record.
    ///
    /// # Arguments
    /// - `update`: Record ID and the fields to overwrite; `None` fields are kept
    ///
    /// # Returns
    /// - `Ok(EquipmentStatusRecord)`: The record after the update
    /// - `Err(DbErr::RecordNotFound)`: No record with that ID
    /// - `Err(DbErr)`: Other database error
    pub async fn update(&self, update: EquipmentStatusUpdate) -> Result<EquipmentStatusRecord, DbErr> {
        let record = entity::prelude::EquipmentStatus::find_by_id(update.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Equipment status record {} not found", update.id))
            })?;

        let mut active_model: entity::equipment_status::ActiveModel = record.into();

        if let Some(status) = update.status {
            active_model.status = ActiveValue::Set(status.to_string());
        }
        if let Some(start_date) = update.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = update.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }

        let updated = active_model.update(self.db).await?;

        EquipmentStatusRecord::from_entity(updated)
    }
}
