//! Persistence seams of the order status engine.
//!
//! The coordinator only talks to these traits. The SeaORM repositories implement them for
//! `DatabaseConnection` and `DatabaseTransaction`; tests also use an in-memory store.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::{
    equipment_status::{EquipmentStatusRecord, EquipmentStatusUpdate},
    order_status::{AppendOrderStatusParams, CurrentOrderStatus, OrderStatusEvent, OrderStatusName},
};

#[async_trait]
pub trait OrderStatusStore: Send + Sync {
    /// Latest event of the order with its owner and status version, `None` if the order
    /// has no status history.
    async fn current_status(&self, order_id: i32) -> Result<Option<CurrentOrderStatus>, DbErr>;

    /// Appends an event if the order is still at `params.expected_version`.
    ///
    /// Returns `None` when the version moved on, in which case nothing is written.
    async fn append_status(
        &self,
        params: AppendOrderStatusParams,
    ) -> Result<Option<OrderStatusEvent>, DbErr>;

    /// Every event of the order, oldest first.
    async fn history(&self, order_id: i32) -> Result<Vec<OrderStatusEvent>, DbErr>;

    /// IDs of orders whose current status is `status`, ascending.
    async fn order_ids_in_status(&self, status: OrderStatusName) -> Result<Vec<i32>, DbErr>;
}

#[async_trait]
pub trait OrderStatusNameStore: Send + Sync {
    async fn all(&self) -> Result<Vec<String>, DbErr>;
}

#[async_trait]
pub trait EquipmentStatusNameStore: Send + Sync {
    async fn all(&self) -> Result<Vec<String>, DbErr>;
}

#[async_trait]
pub trait EquipmentStatusStore: Send + Sync {
    /// Equipment status records attached to the order, by ID.
    async fn by_order(&self, order_id: i32) -> Result<Vec<EquipmentStatusRecord>, DbErr>;

    async fn update(&self, update: EquipmentStatusUpdate) -> Result<(), DbErr>;
}

/// Opens a scope whose writes become visible together on `commit`.
///
/// Dropping a transaction without committing discards its writes.
#[async_trait]
pub trait StatusUnitOfWork: OrderStatusStore + OrderStatusNameStore + EquipmentStatusNameStore {
    type Tx: OrderStatusStore + EquipmentStatusStore + 'static;

    async fn begin(&self) -> Result<Self::Tx, DbErr>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), DbErr>;
}
