use super::*;

fn after_rent_end() -> FixedClock {
    FixedClock(rent_end() + Duration::hours(3))
}

/// Tests an in-progress rental whose end date has passed.
///
/// Expected: Ok(Some(Overdue)) without an actor, equipment still in use
#[tokio::test]
async fn marks_past_due_rental_overdue() -> Result<(), AppError> {
    let stores = memory_rental(OrderStatusName::InProgress, EquipmentStatusName::InUse, 2);
    let clock = after_rent_end();
    let service = OrderStatusService::new(&stores, &clock, TransitionPolicy::Strict);

    let event = service.mark_overdue(ORDER_ID).await?.unwrap();

    assert_eq!(event.status, OrderStatusName::Overdue);
    assert_eq!(event.changed_by, None);
    assert_eq!(event.created_at, clock.0);
    assert_eq!(
        event.comment.as_deref(),
        Some("Rental period ended on 2023-02-24 without the equipment being returned")
    );

    let state = stores.snapshot();
    assert!(state
        .equipment
        .iter()
        .all(|r| r.status == EquipmentStatusName::InUse));

    Ok(())
}

/// Tests rentals that must not be marked overdue.
///
/// Expected: Ok(None) for a running rental before its end date and for an order that is
/// not in progress
#[tokio::test]
async fn leaves_other_orders_alone() -> Result<(), AppError> {
    let running = memory_rental(OrderStatusName::InProgress, EquipmentStatusName::InUse, 1);
    let before_end = FixedClock(rent_end() - Duration::hours(1));
    let service = OrderStatusService::new(&running, &before_end, TransitionPolicy::Strict);
    assert_eq!(service.mark_overdue(ORDER_ID).await?, None);

    let prepared = memory_rental(OrderStatusName::Prepared, EquipmentStatusName::Booked, 1);
    let clock = after_rent_end();
    let service = OrderStatusService::new(&prepared, &clock, TransitionPolicy::Strict);
    assert_eq!(service.mark_overdue(ORDER_ID).await?, None);

    assert_eq!(service.mark_overdue(404).await?, None);

    Ok(())
}

/// Tests a sweep where one order fails to update.
///
/// Expected: the failure is skipped and the other orders are still marked
#[tokio::test]
async fn sweep_continues_past_failures() -> Result<(), AppError> {
    let stores = MemoryStores::new(
        MemoryState::default()
            .with_rental(1, OWNER_ID, OrderStatusName::InProgress, EquipmentStatusName::InUse, 1)
            .with_rental(2, OWNER_ID, OrderStatusName::InProgress, EquipmentStatusName::InUse, 1)
            .with_rental(3, OWNER_ID, OrderStatusName::Approved, EquipmentStatusName::Booked, 1),
    );
    let clock = after_rent_end();
    let service = OrderStatusService::new(&stores, &clock, TransitionPolicy::Strict);

    assert_eq!(service.sweep_overdue().await?, 2);
    assert_eq!(service.orders_in_status("Overdue").await?, vec![1, 2]);

    let stores = MemoryStores::new(
        MemoryState::default()
            .with_rental(4, OWNER_ID, OrderStatusName::InProgress, EquipmentStatusName::InUse, 1),
    );
    stores.fail(|f| f.concurrent_append = true);
    let service = OrderStatusService::new(&stores, &clock, TransitionPolicy::Strict);
    assert_eq!(service.sweep_overdue().await?, 0);

    Ok(())
}

/// Tests that an overdue rental can still be closed with a buffer day.
///
/// Expected: Ok(Closed) and end dates moved by one day
#[tokio::test]
async fn overdue_rental_can_be_closed() -> Result<(), AppError> {
    let stores = memory_rental(OrderStatusName::InProgress, EquipmentStatusName::InUse, 1);
    let clock = after_rent_end();
    let service = OrderStatusService::new(&stores, &clock, TransitionPolicy::Strict);

    service.mark_overdue(ORDER_ID).await?.unwrap();
    service
        .add_status(params(ORDER_ID, "Closed", Principal::new(3, Role::Operator)))
        .await?;

    let state = stores.snapshot();
    let record = &state.equipment[0];
    assert_eq!(record.status, EquipmentStatusName::Available);
    assert_eq!(record.end_date, rent_end() + Duration::days(1));

    Ok(())
}
