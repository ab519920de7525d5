//! Keeps equipment status records in step with order status changes.

use std::collections::BTreeSet;

use chrono::Duration;

use crate::server::{
    error::order_status::OrderStatusError,
    model::{
        equipment_status::{EquipmentStatusName, EquipmentStatusRecord, EquipmentStatusUpdate},
        order_status::OrderStatusName,
        user::Role,
    },
    service::order_status::transition::{self, EquipmentEffect},
};

/// Buffer between the end of one rental and the next, applied on certain closures.
const BUFFER_DAYS: i64 = 1;

/// Verifies that every record holds the status `target` requires.
///
/// # Returns
/// - `Ok(())` - No precondition for `target`, or every record satisfies it
/// - `Err(OrderStatusError::EquipmentNotReady)` - Carries every offending equipment ID
pub fn require_equipment_status(
    target: OrderStatusName,
    records: &[EquipmentStatusRecord],
) -> Result<(), OrderStatusError> {
    let Some(required) = transition::equipment_precondition(target) else {
        return Ok(());
    };

    let equipment_ids: BTreeSet<i32> = records
        .iter()
        .filter(|record| record.status != required)
        .map(|record| record.equipment_id)
        .collect();

    if equipment_ids.is_empty() {
        Ok(())
    } else {
        Err(OrderStatusError::EquipmentNotReady {
            required,
            equipment_ids,
        })
    }
}

/// Computes the record updates that accompany moving an order from `current` to `target`.
///
/// # Arguments
/// - `target` - Status the order is moving to
/// - `current` - Status the order is leaving
/// - `role` - Role of the actor, which decides whether a closure gets a buffer day
/// - `records` - Equipment status records attached to the order
///
/// # Returns
/// One update per record, or none when `target` does not touch equipment.
pub fn compute_equipment_updates(
    target: OrderStatusName,
    current: OrderStatusName,
    role: Role,
    records: &[EquipmentStatusRecord],
) -> Vec<EquipmentStatusUpdate> {
    match transition::equipment_effect(target) {
        EquipmentEffect::Unchanged => Vec::new(),
        EquipmentEffect::SetAll(status) => records
            .iter()
            .map(|record| EquipmentStatusUpdate::status(record.id, status))
            .collect(),
        EquipmentEffect::Release => {
            let extend = closure_extends_booking(current, role);
            records
                .iter()
                .map(|record| EquipmentStatusUpdate {
                    id: record.id,
                    status: Some(EquipmentStatusName::Available),
                    start_date: None,
                    end_date: extend.then(|| record.end_date + Duration::days(BUFFER_DAYS)),
                })
                .collect()
        }
    }
}

/// Whether closing an order that was in `current` adds a buffer day to its bookings.
fn closure_extends_booking(current: OrderStatusName, role: Role) -> bool {
    match current {
        OrderStatusName::InProgress | OrderStatusName::Overdue => true,
        OrderStatusName::Approved | OrderStatusName::Blocked | OrderStatusName::Prepared => {
            role == Role::Manager
        }
        _ => false,
    }
}
