//! Order status transition table.
//!
//! Every ordered pair of order statuses has exactly one `TransitionRule`. A rule names the
//! roles allowed to perform the change, whether the order's owner may perform it, what the
//! equipment attached to the order must look like beforehand, and how that equipment changes
//! afterwards. Pairs no role is listed for carry an empty role set.

use crate::server::model::{
    equipment_status::EquipmentStatusName, order_status::OrderStatusName, user::Role,
};

/// What happens to the order's equipment status records when a transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentEffect {
    /// Records are left as they are.
    Unchanged,
    /// Every record is set to the given status.
    SetAll(EquipmentStatusName),
    /// Every record becomes `Available`; the booking may be extended by a one day buffer.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: OrderStatusName,
    pub to: OrderStatusName,
    /// Roles that may perform this transition on any order.
    pub allowed_roles: &'static [Role],
    /// Whether the order's owner may perform this transition regardless of role.
    pub owner_may_cancel: bool,
    /// Status every attached equipment record must hold before the transition.
    pub equipment_precondition: Option<EquipmentStatusName>,
    pub equipment_effect: EquipmentEffect,
}

impl TransitionRule {
    /// Whether some role is listed for this pair.
    pub fn has_listed_roles(&self) -> bool {
        !self.allowed_roles.is_empty()
    }
}

/// Looks up the rule for moving an order from `from` to `to`.
pub fn rule(from: OrderStatusName, to: OrderStatusName) -> TransitionRule {
    TransitionRule {
        from,
        to,
        allowed_roles: allowed_roles(from, to),
        owner_may_cancel: owner_may_cancel(from, to),
        equipment_precondition: equipment_precondition(to),
        equipment_effect: equipment_effect(to),
    }
}

fn allowed_roles(from: OrderStatusName, to: OrderStatusName) -> &'static [Role] {
    use OrderStatusName::*;

    match (from, to) {
        (InReview, Approved | Rejected) => &[Role::Manager],
        (Approved, Prepared) => &[Role::Operator, Role::Admin],
        (Approved, Closed) => &[Role::Manager],
        (Prepared, InProgress) => &[Role::Operator],
        (Prepared, Closed) => &[Role::Manager, Role::Operator],
        (InProgress | Overdue, Closed) => &[Role::Manager, Role::Operator],
        (Blocked, Closed) => &[Role::Manager],
        _ => &[],
    }
}

fn owner_may_cancel(from: OrderStatusName, to: OrderStatusName) -> bool {
    use OrderStatusName::*;

    to == Closed && matches!(from, InReview | Approved | Prepared)
}

/// Equipment status required before an order may enter `to`.
pub fn equipment_precondition(to: OrderStatusName) -> Option<EquipmentStatusName> {
    match to {
        OrderStatusName::Prepared | OrderStatusName::InProgress => {
            Some(EquipmentStatusName::Booked)
        }
        _ => None,
    }
}

/// Effect on equipment records of an order entering `to`.
pub fn equipment_effect(to: OrderStatusName) -> EquipmentEffect {
    match to {
        OrderStatusName::Rejected => EquipmentEffect::SetAll(EquipmentStatusName::Available),
        OrderStatusName::InProgress => EquipmentEffect::SetAll(EquipmentStatusName::InUse),
        OrderStatusName::Closed => EquipmentEffect::Release,
        _ => EquipmentEffect::Unchanged,
    }
}
