use crate::server::{
    data::order_status::OrderStatusRepository,
    model::order_status::{AppendOrderStatusParams, OrderStatusName},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod append;
mod get_current;
mod get_history;
mod get_order_ids_by_current_status;
