//! Authorization of order status transitions.

use std::str::FromStr;

use crate::server::{
    model::user::Principal, service::order_status::transition::TransitionRule,
};

/// How transitions without listed roles are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Only listed roles and the owner cancellation path are allowed.
    #[default]
    Strict,
    /// Any staff role may perform a transition no role is listed for.
    StaffOverride,
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(TransitionPolicy::Strict),
            "staff-override" => Ok(TransitionPolicy::StaffOverride),
            other => Err(format!(
                "expected 'strict' or 'staff-override', got '{}'",
                other
            )),
        }
    }
}

/// Decides whether a principal may apply a transition rule to an order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionGuard {
    policy: TransitionPolicy,
}

impl TransitionGuard {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    /// Checks the owner path first, then the role table.
    ///
    /// # Arguments
    /// - `principal` - Actor requesting the change
    /// - `owner_id` - ID of the user who placed the order
    /// - `rule` - Rule for the order's current status and the requested target
    ///
    /// # Returns
    /// - `true` - The principal may perform the transition
    /// - `false` - The transition must be refused
    pub fn authorize(&self, principal: &Principal, owner_id: i32, rule: &TransitionRule) -> bool {
        if rule.owner_may_cancel && principal.id == owner_id {
            return true;
        }

        if rule.has_listed_roles() {
            return rule.allowed_roles.contains(&principal.role);
        }

        match self.policy {
            TransitionPolicy::Strict => false,
            TransitionPolicy::StaffOverride => principal.role.is_staff(),
        }
    }
}
