//! Order status coordination.
//!
//! `OrderStatusService` is the only way order status changes are written. One change runs
//! inside one unit of work: read the current status, authorize the transition, check and
//! update the order's equipment, append the new event. Any failure drops the transaction,
//! leaving neither a new event nor an equipment change behind.

pub mod guard;
pub mod store;
pub mod sync;
pub mod transition;

#[cfg(test)]
mod test;

use crate::server::{
    error::{order_status::OrderStatusError, AppError},
    model::{
        order_status::{
            AddOrderStatusParams, AppendOrderStatusParams, CurrentOrderStatus, OrderStatusEvent,
            OrderStatusName,
        },
        user::Principal,
    },
    service::order_status::{
        guard::{TransitionGuard, TransitionPolicy},
        store::{
            EquipmentStatusNameStore, EquipmentStatusStore, OrderStatusNameStore,
            OrderStatusStore, StatusUnitOfWork,
        },
    },
    util::clock::Clock,
};

pub struct OrderStatusService<'a, S> {
    stores: &'a S,
    clock: &'a dyn Clock,
    guard: TransitionGuard,
}

impl<'a, S: StatusUnitOfWork> OrderStatusService<'a, S> {
    pub fn new(stores: &'a S, clock: &'a dyn Clock, policy: TransitionPolicy) -> Self {
        Self {
            stores,
            clock,
            guard: TransitionGuard::new(policy),
        }
    }

    /// Moves an order to a new status on behalf of a user.
    ///
    /// Failures are logged with the order, the actor and the requested status.
    ///
    /// # Returns
    /// - `Ok(OrderStatusEvent)` - The appended event
    /// - `Err(AppError::OrderStatusErr(EmptyStatus | UnknownStatus))` - Invalid target
    /// - `Err(AppError::OrderStatusErr(OrderNotFound))` - Order has no status history
    /// - `Err(AppError::OrderStatusErr(TransitionDenied))` - Guard refused the change
    /// - `Err(AppError::OrderStatusErr(EquipmentNotReady))` - Equipment precondition failed
    /// - `Err(AppError::OrderStatusErr(VersionConflict))` - Concurrent change won the race
    /// - `Err(AppError::DbErr(_))` - Lookup or write failure
    pub async fn add_status(
        &self,
        params: AddOrderStatusParams,
    ) -> Result<OrderStatusEvent, AppError> {
        let order_id = params.order_id;
        let actor = params.principal;
        let requested = params.status.clone();

        let result = self.apply_status(params).await;

        match &result {
            Ok(event) => tracing::info!(
                order_id,
                actor = actor.id,
                role = %actor.role,
                status = %event.status,
                "Order status changed"
            ),
            Err(err) => tracing::warn!(
                order_id,
                actor = actor.id,
                role = %actor.role,
                status = %requested,
                "Order status change failed: {}",
                err
            ),
        }

        result
    }

    async fn apply_status(&self, params: AddOrderStatusParams) -> Result<OrderStatusEvent, AppError> {
        let target = parse_target(&params.status)?;
        let principal = params.principal;

        let tx = self.stores.begin().await?;

        let current = tx
            .current_status(params.order_id)
            .await?
            .ok_or(OrderStatusError::OrderNotFound(params.order_id))?;

        let rule = transition::rule(current.status(), target);
        if !self.guard.authorize(&principal, current.owner_id, &rule) {
            return Err(OrderStatusError::TransitionDenied {
                user_id: principal.id,
                order_id: params.order_id,
                from: current.status(),
                to: target,
            }
            .into());
        }

        let records = tx.by_order(params.order_id).await?;
        sync::require_equipment_status(target, &records)?;

        let event = tx
            .append_status(AppendOrderStatusParams {
                order_id: params.order_id,
                expected_version: current.status_version,
                status: target,
                comment: params.comment,
                created_at: self.clock.now(),
                changed_by: Some(principal.id),
            })
            .await?
            .ok_or(OrderStatusError::VersionConflict {
                order_id: params.order_id,
            })?;

        for update in
            sync::compute_equipment_updates(target, current.status(), principal.role, &records)
        {
            tx.update(update).await?;
        }

        self.stores.commit(tx).await?;

        Ok(event)
    }

    /// Status history of an order, oldest first.
    ///
    /// Staff may read any order; other users only orders they placed.
    pub async fn history(
        &self,
        order_id: i32,
        principal: &Principal,
    ) -> Result<Vec<OrderStatusEvent>, AppError> {
        self.visible_current_status(order_id, principal).await?;

        Ok(self.stores.history(order_id).await?)
    }

    /// Latest status event of an order, with the same access rule as `history`.
    pub async fn current_status(
        &self,
        order_id: i32,
        principal: &Principal,
    ) -> Result<OrderStatusEvent, AppError> {
        let current = self.visible_current_status(order_id, principal).await?;

        Ok(current.event)
    }

    pub async fn all_status_names(&self) -> Result<Vec<String>, AppError> {
        Ok(OrderStatusNameStore::all(self.stores).await?)
    }

    pub async fn equipment_status_names(&self) -> Result<Vec<String>, AppError> {
        Ok(EquipmentStatusNameStore::all(self.stores).await?)
    }

    /// IDs of orders whose current status is `status`.
    ///
    /// Callers are responsible for restricting this to staff.
    pub async fn orders_in_status(&self, status: &str) -> Result<Vec<i32>, AppError> {
        let status = parse_target(status)?;

        Ok(self.stores.order_ids_in_status(status).await?)
    }

    /// Marks an `InProgress` order `Overdue` once any of its equipment is past its end date.
    ///
    /// This is a system transition: it is not subject to the guard and the event has no
    /// actor. Equipment stays `InUse`.
    ///
    /// # Returns
    /// - `Ok(Some(event))` - The order was marked overdue
    /// - `Ok(None)` - The order is not in progress or nothing is past due
    /// - `Err(AppError::OrderStatusErr(VersionConflict))` - A user changed the order meanwhile
    /// - `Err(AppError::DbErr(_))` - Lookup or write failure
    pub async fn mark_overdue(&self, order_id: i32) -> Result<Option<OrderStatusEvent>, AppError> {
        let now = self.clock.now();
        let tx = self.stores.begin().await?;

        let Some(current) = tx.current_status(order_id).await? else {
            return Ok(None);
        };
        if current.status() != OrderStatusName::InProgress {
            return Ok(None);
        }

        let records = tx.by_order(order_id).await?;
        let Some(ended) = records
            .iter()
            .map(|record| record.end_date)
            .filter(|end_date| *end_date < now)
            .min()
        else {
            return Ok(None);
        };

        let event = tx
            .append_status(AppendOrderStatusParams {
                order_id,
                expected_version: current.status_version,
                status: OrderStatusName::Overdue,
                comment: Some(format!(
                    "Rental period ended on {} without the equipment being returned",
                    ended.format("%Y-%m-%d")
                )),
                created_at: now,
                changed_by: None,
            })
            .await?
            .ok_or(OrderStatusError::VersionConflict { order_id })?;

        self.stores.commit(tx).await?;

        tracing::info!(order_id, "Order marked overdue");

        Ok(Some(event))
    }

    /// Runs `mark_overdue` for every order currently in progress.
    ///
    /// A failure on one order is logged and does not stop the sweep.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of orders marked overdue
    /// - `Err(AppError::DbErr(_))` - The in-progress orders could not be listed
    pub async fn sweep_overdue(&self) -> Result<usize, AppError> {
        let order_ids = self
            .stores
            .order_ids_in_status(OrderStatusName::InProgress)
            .await?;

        let mut marked = 0;
        for order_id in order_ids {
            match self.mark_overdue(order_id).await {
                Ok(Some(_)) => marked += 1,
                Ok(None) => {}
                Err(e) => tracing::error!(order_id, "Failed to mark order overdue: {}", e),
            }
        }

        Ok(marked)
    }

    async fn visible_current_status(
        &self,
        order_id: i32,
        principal: &Principal,
    ) -> Result<CurrentOrderStatus, AppError> {
        let current = self
            .stores
            .current_status(order_id)
            .await?
            .ok_or(OrderStatusError::OrderNotFound(order_id))?;

        if principal.role.is_staff() || principal.id == current.owner_id {
            return Ok(current);
        }

        // Users who changed the order's status at least once may also read it.
        let participated = self
            .stores
            .history(order_id)
            .await?
            .iter()
            .any(|event| event.changed_by == Some(principal.id));

        if !participated {
            return Err(OrderStatusError::AccessDenied {
                user_id: principal.id,
                order_id,
            }
            .into());
        }

        Ok(current)
    }
}

fn parse_target(status: &str) -> Result<OrderStatusName, OrderStatusError> {
    if status.trim().is_empty() {
        return Err(OrderStatusError::EmptyStatus);
    }

    status
        .parse::<OrderStatusName>()
        .map_err(OrderStatusError::UnknownStatus)
}
