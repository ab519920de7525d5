use sea_orm_migration::{prelude::*, schema::*};

use crate::seed::{EQUIPMENT_STATUS_NAMES, ORDER_STATUS_NAMES};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderStatusName::Table)
                    .if_not_exists()
                    .col(string(OrderStatusName::Name).primary_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EquipmentStatusName::Table)
                    .if_not_exists()
                    .col(string(EquipmentStatusName::Name).primary_key())
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();

        let mut order_names = Query::insert();
        order_names
            .into_table(OrderStatusName::Table)
            .columns([OrderStatusName::Name]);
        for name in ORDER_STATUS_NAMES {
            order_names
                .values([(*name).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        db.execute(&order_names).await?;

        let mut equipment_names = Query::insert();
        equipment_names
            .into_table(EquipmentStatusName::Table)
            .columns([EquipmentStatusName::Name]);
        for name in EQUIPMENT_STATUS_NAMES {
            equipment_names
                .values([(*name).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        db.execute(&equipment_names).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentStatusName::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderStatusName::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderStatusName {
    Table,
    Name,
}

#[derive(DeriveIden)]
pub enum EquipmentStatusName {
    Table,
    Name,
}
