use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_equipment_table::Equipment,
    m20250301_000003_create_order_table::Orders,
    m20250301_000005_create_status_name_tables::EquipmentStatusName,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EquipmentStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(EquipmentStatus::Id))
                    .col(integer(EquipmentStatus::EquipmentId))
                    .col(string(EquipmentStatus::Status))
                    .col(timestamp_with_time_zone(EquipmentStatus::StartDate))
                    .col(timestamp_with_time_zone(EquipmentStatus::EndDate))
                    .col(integer_null(EquipmentStatus::OrderId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_status_equipment_id")
                            .from(EquipmentStatus::Table, EquipmentStatus::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_status_status")
                            .from(EquipmentStatus::Table, EquipmentStatus::Status)
                            .to(EquipmentStatusName::Table, EquipmentStatusName::Name)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_status_order_id")
                            .from(EquipmentStatus::Table, EquipmentStatus::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EquipmentStatus {
    Table,
    Id,
    EquipmentId,
    Status,
    StartDate,
    EndDate,
    OrderId,
}
