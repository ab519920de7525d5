use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000003_create_order_table::Orders,
    m20250301_000005_create_status_name_tables::OrderStatusName,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderStatus::Id))
                    .col(integer(OrderStatus::OrderId))
                    .col(string(OrderStatus::Status))
                    .col(text_null(OrderStatus::Comment))
                    .col(
                        timestamp_with_time_zone(OrderStatus::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(OrderStatus::ChangedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_status_order_id")
                            .from(OrderStatus::Table, OrderStatus::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_status_status")
                            .from(OrderStatus::Table, OrderStatus::Status)
                            .to(OrderStatusName::Table, OrderStatusName::Name)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_status_changed_by")
                            .from(OrderStatus::Table, OrderStatus::ChangedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_status_order_id_created_at")
                    .table(OrderStatus::Table)
                    .col(OrderStatus::OrderId)
                    .col(OrderStatus::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderStatus {
    Table,
    Id,
    OrderId,
    Status,
    Comment,
    CreatedAt,
    ChangedBy,
}
