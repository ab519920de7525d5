use crate::server::{
    data::equipment_status::EquipmentStatusRepository,
    model::equipment_status::{EquipmentStatusName, EquipmentStatusUpdate},
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_order_id;
mod update;
