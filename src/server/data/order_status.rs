//! Order status history repository.
//!
//! Status events are only ever inserted. Appending an event also bumps the order's
//! `status_version` in the same statement sequence, which makes the append a
//! compare-and-swap against the version read with the current status.

use sea_orm::{
    ExprTrait,
    sea_query::{Alias, Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::order_status::{
    AppendOrderStatusParams, CurrentOrderStatus, OrderStatusEvent, OrderStatusName,
};

pub struct OrderStatusRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderStatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the latest status event of an order along with the order row.
    ///
    /// The latest event is the one with the greatest `created_at`, ties broken by the
    /// greatest `id`.
    ///
    /// # Arguments
    /// - `order_id`: ID of the order
    ///
    /// # Returns
    /// - `Ok(Some(CurrentOrderStatus))`: Latest event, owner and status version
    /// - `Ok(None)`: The order has no status history
    /// - `Err(DbErr)`: Database error or an unknown status stored for the event
    pub async fn get_current(&self, order_id: i32) -> Result<Option<CurrentOrderStatus>, DbErr> {
        let Some((event, order)) = entity::prelude::OrderStatus::find()
            .filter(entity::order_status::Column::OrderId.eq(order_id))
            .order_by_desc(entity::order_status::Column::CreatedAt)
            .order_by_desc(entity::order_status::Column::Id)
            .find_also_related(entity::prelude::Order)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let order = order.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Order {} of status event {}", order_id, event.id))
        })?;

        Ok(Some(CurrentOrderStatus {
            event: OrderStatusEvent::from_entity(event)?,
            owner_id: order.user_id,
            status_version: order.status_version,
        }))
    }

    /// Appends a status event if the order is still at the expected version.
    ///
    /// The version bump is a conditional update; when it matches no row the event is not
    /// inserted.
    ///
    /// # Arguments
    /// - `params`: Event fields and the version the caller read
    ///
    /// # Returns
    /// - `Ok(Some(OrderStatusEvent))`: The inserted event
    /// - `Ok(None)`: The order's version no longer matches `params.expected_version`
    /// - `Err(DbErr)`: Database error
    pub async fn append(
        &self,
        params: AppendOrderStatusParams,
    ) -> Result<Option<OrderStatusEvent>, DbErr> {
        let bumped = entity::prelude::Order::update_many()
            .col_expr(
                entity::order::Column::StatusVersion,
                Expr::value(params.expected_version + 1),
            )
            .filter(entity::order::Column::Id.eq(params.order_id))
            .filter(entity::order::Column::StatusVersion.eq(params.expected_version))
            .exec(self.db)
            .await?;

        if bumped.rows_affected == 0 {
            return Ok(None);
        }

        let event = entity::order_status::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            status: ActiveValue::Set(params.status.to_string()),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(params.created_at),
            changed_by: ActiveValue::Set(params.changed_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(OrderStatusEvent::from_entity(event)?))
    }

    /// Gets all status events of an order, oldest first (`created_at`, then `id`).
    pub async fn get_history(&self, order_id: i32) -> Result<Vec<OrderStatusEvent>, DbErr> {
        entity::prelude::OrderStatus::find()
            .filter(entity::order_status::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_status::Column::CreatedAt)
            .order_by_asc(entity::order_status::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(OrderStatusEvent::from_entity)
            .collect()
    }

    /// Gets the IDs of orders whose latest status event is `status`, ascending.
    ///
    /// An event is the latest of its order when no event of the same order has a later
    /// `created_at`, or the same `created_at` and a higher `id`.
    pub async fn get_order_ids_by_current_status(
        &self,
        status: OrderStatusName,
    ) -> Result<Vec<i32>, DbErr> {
        use entity::order_status::{Column, Entity};

        let later = Alias::new("later");
        let later_event = Query::select()
            .expr(Expr::val(1))
            .from_as(Entity, later.clone())
            .and_where(Expr::col((later.clone(), Column::OrderId)).equals((Entity, Column::OrderId)))
            .and_where(
                Expr::col((later.clone(), Column::CreatedAt))
                    .gt(Expr::col((Entity, Column::CreatedAt)))
                    .or(Expr::col((later.clone(), Column::CreatedAt))
                        .eq(Expr::col((Entity, Column::CreatedAt)))
                        .and(Expr::col((later, Column::Id)).gt(Expr::col((Entity, Column::Id))))),
            )
            .to_owned();

        Entity::find()
            .select_only()
            .column(Column::OrderId)
            .filter(Column::Status.eq(status.as_str()))
            .filter(Expr::exists(later_event).not())
            .order_by_asc(Column::OrderId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
