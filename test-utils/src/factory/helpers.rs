//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating a complete rental
//! (order, status history, equipment and equipment statuses) in one call.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    equipment::create_equipment, equipment_status::EquipmentStatusFactory, order::OrderFactory,
    order_status::OrderStatusFactory,
};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A rental created by `create_rental` and friends.
#[derive(Debug, Clone)]
pub struct Rental {
    pub order: entity::order::Model,
    pub equipment: Vec<entity::equipment::Model>,
    pub equipment_statuses: Vec<entity::equipment_status::Model>,
    pub status: entity::order_status::Model,
}

impl Rental {
    /// Equipment ids in creation order.
    pub fn equipment_ids(&self) -> Vec<i32> {
        self.equipment.iter().map(|e| e.id).collect()
    }
}

/// Creates an order in `InReview` with `equipment_count` booked equipment items.
///
/// This mirrors what order creation does in production:
/// 1. Order owned by `owner_id`
/// 2. Equipment items linked to the order
/// 3. One `Booked` equipment status record per item, spanning the rent period
/// 4. The initial `InReview` status event
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the renting user
/// - `equipment_count` - Number of equipment items to create and attach
///
/// # Returns
/// - `Ok(Rental)` - All created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rental(
    db: &DatabaseConnection,
    owner_id: i32,
    equipment_count: usize,
) -> Result<Rental, DbErr> {
    RentalFactory::new(db, owner_id)
        .equipment_count(equipment_count)
        .build()
        .await
}

/// Creates a rental whose current status is `order_status` and whose equipment records all
/// hold `equipment_status`.
///
/// The history contains `InReview` followed by `order_status` (unless they are equal).
///
/// # Returns
/// - `Ok(Rental)` - All created rows, `status` being the latest event
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rental_in_status(
    db: &DatabaseConnection,
    owner_id: i32,
    order_status: &str,
    equipment_status: &str,
    equipment_count: usize,
) -> Result<Rental, DbErr> {
    RentalFactory::new(db, owner_id)
        .order_status(order_status)
        .equipment_status(equipment_status)
        .equipment_count(equipment_count)
        .build()
        .await
}

/// Factory for whole rentals with customizable statuses and dates.
pub struct RentalFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    order_status: String,
    equipment_status: String,
    equipment_count: usize,
    rent_start: DateTime<Utc>,
    rent_end: DateTime<Utc>,
}

impl<'a> RentalFactory<'a> {
    /// Creates a new RentalFactory with default values.
    ///
    /// Defaults:
    /// - order_status: `"InReview"`
    /// - equipment_status: `"Booked"`
    /// - equipment_count: `1`
    /// - rent period: tomorrow for seven days
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let rent_start = Utc::now() + Duration::days(1);
        Self {
            db,
            owner_id,
            order_status: "InReview".to_string(),
            equipment_status: "Booked".to_string(),
            equipment_count: 1,
            rent_start,
            rent_end: rent_start + Duration::days(7),
        }
    }

    pub fn order_status(mut self, status: impl Into<String>) -> Self {
        self.order_status = status.into();
        self
    }

    pub fn equipment_status(mut self, status: impl Into<String>) -> Self {
        self.equipment_status = status.into();
        self
    }

    pub fn equipment_count(mut self, count: usize) -> Self {
        self.equipment_count = count;
        self
    }

    /// Sets the rent period, which is also the span of every equipment status record.
    pub fn rent_period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.rent_start = start;
        self.rent_end = end;
        self
    }

    /// Builds and inserts the rental.
    ///
    /// # Returns
    /// - `Ok(Rental)` - All created rows
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<Rental, DbErr> {
        let mut equipment = Vec::with_capacity(self.equipment_count);
        for _ in 0..self.equipment_count {
            equipment.push(create_equipment(self.db).await?);
        }

        let order = OrderFactory::new(self.db, self.owner_id)
            .rent_period(self.rent_start, self.rent_end)
            .equipment_ids(equipment.iter().map(|e| e.id).collect())
            .build()
            .await?;

        let mut equipment_statuses = Vec::with_capacity(equipment.len());
        for item in &equipment {
            let record = EquipmentStatusFactory::new(self.db, item.id)
                .status(self.equipment_status.clone())
                .order_id(Some(order.id))
                .period(self.rent_start, self.rent_end)
                .build()
                .await?;
            equipment_statuses.push(record);
        }

        let created_at = Utc::now() - Duration::hours(2);
        let mut status = OrderStatusFactory::new(self.db, order.id)
            .status("InReview")
            .changed_by(Some(self.owner_id))
            .created_at(created_at)
            .build()
            .await?;

        if self.order_status != "InReview" {
            status = OrderStatusFactory::new(self.db, order.id)
                .status(self.order_status)
                .created_at(created_at + Duration::hours(1))
                .build()
                .await?;
        }

        Ok(Rental {
            order,
            equipment,
            equipment_statuses,
            status,
        })
    }
}
