use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{order_status::OrderStatusError, AppError},
    model::{
        equipment_status::EquipmentStatusName,
        order_status::{AddOrderStatusParams, OrderStatusName},
        user::{Principal, Role},
    },
    service::order_status::{guard::TransitionPolicy, store::OrderStatusStore, OrderStatusService},
    util::clock::{FixedClock, SystemClock},
};

use memory::{rent_end, MemoryState, MemoryStores};

mod overdue;

const OWNER_ID: i32 = 1;
const ORDER_ID: i32 = 7;

fn params(order_id: i32, status: &str, principal: Principal) -> AddOrderStatusParams {
    AddOrderStatusParams {
        order_id,
        status: status.to_string(),
        comment: None,
        principal,
    }
}

/// Memory stores holding a single rental owned by `OWNER_ID`.
fn memory_rental(
    status: OrderStatusName,
    equipment_status: EquipmentStatusName,
    equipment_count: i32,
) -> MemoryStores {
    MemoryStores::new(MemoryState::default().with_rental(
        ORDER_ID,
        OWNER_ID,
        status,
        equipment_status,
        equipment_count,
    ))
}

/// Principal backed by a freshly inserted user with `role`.
async fn principal_with_role(
    db: &sea_orm::DatabaseConnection,
    role: Role,
) -> Result<Principal, DbErr> {
    let user = factory::user::create_user_with_role(db, role.as_str()).await?;
    Ok(Principal::new(user.id, role))
}
