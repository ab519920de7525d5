use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_equipment_table::Equipment,
    m20250301_000003_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderEquipment::Table)
                    .if_not_exists()
                    .col(integer(OrderEquipment::OrderId))
                    .col(integer(OrderEquipment::EquipmentId))
                    .primary_key(
                        Index::create()
                            .col(OrderEquipment::OrderId)
                            .col(OrderEquipment::EquipmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_equipment_order_id")
                            .from(OrderEquipment::Table, OrderEquipment::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_equipment_equipment_id")
                            .from(OrderEquipment::Table, OrderEquipment::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderEquipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderEquipment {
    Table,
    OrderId,
    EquipmentId,
}
