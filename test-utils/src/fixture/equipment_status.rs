//! Equipment status fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::equipment_status;

/// Creates a `Booked` equipment status record model.
///
/// # Default Values
/// - id: `1`
/// - equipment_id: `1`
/// - status: `"Booked"`
/// - start_date: `2023-02-20T00:00:00Z`
/// - end_date: `2023-02-24T00:00:00Z`
/// - order_id: `Some(1)`
pub fn entity() -> equipment_status::Model {
    entity_builder().build()
}

/// Creates an equipment status entity builder for customization.
pub fn entity_builder() -> EquipmentStatusEntityBuilder {
    EquipmentStatusEntityBuilder {
        model: equipment_status::Model {
            id: 1,
            equipment_id: 1,
            status: "Booked".to_string(),
            start_date: Utc.with_ymd_and_hms(2023, 2, 20, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2023, 2, 24, 0, 0, 0).unwrap(),
            order_id: Some(1),
        },
    }
}

/// Builder for equipment status entity models.
pub struct EquipmentStatusEntityBuilder {
    model: equipment_status::Model,
}

impl EquipmentStatusEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn equipment_id(mut self, equipment_id: i32) -> Self {
        self.model.equipment_id = equipment_id;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.model.end_date = end_date;
        self
    }

    pub fn order_id(mut self, order_id: Option<i32>) -> Self {
        self.model.order_id = order_id;
        self
    }

    pub fn build(self) -> equipment_status::Model {
        self.model
    }
}
