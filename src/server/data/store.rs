//! Order status engine stores backed by SeaORM.
//!
//! Reads and writes outside a unit of work go through the pooled `DatabaseConnection`;
//! `StatusUnitOfWork::begin` hands out a `DatabaseTransaction` that rolls back when dropped
//! without `commit`.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{
        equipment_status::EquipmentStatusRepository, order_status::OrderStatusRepository,
        status_name::StatusNameRepository,
    },
    model::{
        equipment_status::{EquipmentStatusRecord, EquipmentStatusUpdate},
        order_status::{
            AppendOrderStatusParams, CurrentOrderStatus, OrderStatusEvent, OrderStatusName,
        },
    },
    service::order_status::store::{
        EquipmentStatusNameStore, EquipmentStatusStore, OrderStatusNameStore, OrderStatusStore,
        StatusUnitOfWork,
    },
};

#[async_trait]
impl OrderStatusStore for DatabaseConnection {
    async fn current_status(&self, order_id: i32) -> Result<Option<CurrentOrderStatus>, DbErr> {
        OrderStatusRepository::new(self).get_current(order_id).await
    }

    async fn append_status(
        &self,
        params: AppendOrderStatusParams,
    ) -> Result<Option<OrderStatusEvent>, DbErr> {
        OrderStatusRepository::new(self).append(params).await
    }

    async fn history(&self, order_id: i32) -> Result<Vec<OrderStatusEvent>, DbErr> {
        OrderStatusRepository::new(self).get_history(order_id).await
    }

    async fn order_ids_in_status(&self, status: OrderStatusName) -> Result<Vec<i32>, DbErr> {
        OrderStatusRepository::new(self)
            .get_order_ids_by_current_status(status)
            .await
    }
}

#[async_trait]
impl OrderStatusNameStore for DatabaseConnection {
    async fn all(&self) -> Result<Vec<String>, DbErr> {
        StatusNameRepository::new(self).get_order_status_names().await
    }
}

#[async_trait]
impl EquipmentStatusNameStore for DatabaseConnection {
    async fn all(&self) -> Result<Vec<String>, DbErr> {
        StatusNameRepository::new(self)
            .get_equipment_status_names()
            .await
    }
}

#[async_trait]
impl StatusUnitOfWork for DatabaseConnection {
    type Tx = DatabaseTransaction;

    async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        TransactionTrait::begin(self).await
    }

    async fn commit(&self, tx: DatabaseTransaction) -> Result<(), DbErr> {
        tx.commit().await
    }
}

#[async_trait]
impl OrderStatusStore for DatabaseTransaction {
    async fn current_status(&self, order_id: i32) -> Result<Option<CurrentOrderStatus>, DbErr> {
        OrderStatusRepository::new(self).get_current(order_id).await
    }

    async fn append_status(
        &self,
        params: AppendOrderStatusParams,
    ) -> Result<Option<OrderStatusEvent>, DbErr> {
        OrderStatusRepository::new(self).append(params).await
    }

    async fn history(&self, order_id: i32) -> Result<Vec<OrderStatusEvent>, DbErr> {
        OrderStatusRepository::new(self).get_history(order_id).await
    }

    async fn order_ids_in_status(&self, status: OrderStatusName) -> Result<Vec<i32>, DbErr> {
        OrderStatusRepository::new(self)
            .get_order_ids_by_current_status(status)
            .await
    }
}

#[async_trait]
impl EquipmentStatusStore for DatabaseTransaction {
    async fn by_order(&self, order_id: i32) -> Result<Vec<EquipmentStatusRecord>, DbErr> {
        EquipmentStatusRepository::new(self)
            .get_by_order_id(order_id)
            .await
    }

    async fn update(&self, update: EquipmentStatusUpdate) -> Result<(), DbErr> {
        EquipmentStatusRepository::new(self).update(update).await?;
        Ok(())
    }
}
