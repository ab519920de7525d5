//! Equipment status domain models.
//!
//! An equipment status record states that an equipment item is in some status for a date
//! range, optionally on behalf of an order. Order status changes rewrite the records attached
//! to the order.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Closed vocabulary of equipment statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EquipmentStatusName {
    Available,
    Booked,
    InUse,
    NotAvailable,
}

impl EquipmentStatusName {
    pub const ALL: [EquipmentStatusName; 4] = [
        EquipmentStatusName::Available,
        EquipmentStatusName::Booked,
        EquipmentStatusName::InUse,
        EquipmentStatusName::NotAvailable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentStatusName::Available => "Available",
            EquipmentStatusName::Booked => "Booked",
            EquipmentStatusName::InUse => "InUse",
            EquipmentStatusName::NotAvailable => "NotAvailable",
        }
    }
}

impl fmt::Display for EquipmentStatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatusName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentStatusName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Status of one equipment item over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentStatusRecord {
    pub id: i32,
    pub equipment_id: i32,
    pub status: EquipmentStatusName,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Order the record was created for, if any.
    pub order_id: Option<i32>,
}

impl EquipmentStatusRecord {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(EquipmentStatusRecord)` - The converted record
    /// - `Err(DbErr::Custom)` - The stored status is not a known equipment status
    pub fn from_entity(entity: entity::equipment_status::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<EquipmentStatusName>().map_err(|value| {
            DbErr::Custom(format!(
                "Invalid equipment status '{}' stored for record {}",
                value, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            equipment_id: entity.equipment_id,
            status,
            start_date: entity.start_date,
            end_date: entity.end_date,
            order_id: entity.order_id,
        })
    }
}

/// Partial update of an equipment status record. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentStatusUpdate {
    pub id: i32,
    pub status: Option<EquipmentStatusName>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl EquipmentStatusUpdate {
    /// Update that only changes the status of record `id`.
    pub fn status(id: i32, status: EquipmentStatusName) -> Self {
        Self {
            id,
            status: Some(status),
            start_date: None,
            end_date: None,
        }
    }
}
