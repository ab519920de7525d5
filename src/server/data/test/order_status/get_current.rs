use super::*;

/// Tests reading the current status of an order with a two-event history.
///
/// Verifies that the latest event by creation time is returned together with the order's
/// owner and status version.
///
/// Expected: Ok(Some) with the Approved event
#[tokio::test]
async fn returns_latest_event_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental_in_status(db, owner.id, "Approved", "Booked", 1)
        .await?;

    let repo = OrderStatusRepository::new(db);
    let current = repo.get_current(rental.order.id).await?.unwrap();

    assert_eq!(current.event.id, rental.status.id);
    assert_eq!(current.status(), OrderStatusName::Approved);
    assert_eq!(current.owner_id, owner.id);
    assert_eq!(current.status_version, 0);

    Ok(())
}

/// Tests two events sharing a creation time.
///
/// Expected: the event with the greater id is current
#[tokio::test]
async fn breaks_created_at_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;
    let created_at = Utc::now();

    factory::order_status::OrderStatusFactory::new(db, order.id)
        .status("InReview")
        .created_at(created_at)
        .build()
        .await?;
    let later = factory::order_status::OrderStatusFactory::new(db, order.id)
        .status("Rejected")
        .created_at(created_at)
        .build()
        .await?;

    let repo = OrderStatusRepository::new(db);
    let current = repo.get_current(order.id).await?.unwrap();

    assert_eq!(current.event.id, later.id);
    assert_eq!(current.status(), OrderStatusName::Rejected);

    Ok(())
}

/// Tests an order without any status event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;

    let repo = OrderStatusRepository::new(db);

    assert!(repo.get_current(order.id).await?.is_none());
    assert!(repo.get_current(order.id + 100).await?.is_none());

    Ok(())
}

/// Tests a stored status outside the vocabulary.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Order)
        .with_table(entity::prelude::OrderStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;
    factory::create_order_status(db, order.id, "Lost").await?;

    let repo = OrderStatusRepository::new(db);
    let result = repo.get_current(order.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
