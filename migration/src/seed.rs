//! Reference data seeded by the status name migration.
//!
//! Kept public so test setups that build tables from entities can seed the same rows.

/// Every order status name, in lifecycle order.
pub const ORDER_STATUS_NAMES: &[&str] = &[
    "InReview",
    "Approved",
    "Prepared",
    "InProgress",
    "Overdue",
    "Rejected",
    "Closed",
    "Blocked",
];

/// Every equipment status name.
pub const EQUIPMENT_STATUS_NAMES: &[&str] = &["Available", "Booked", "InUse", "NotAvailable"];
