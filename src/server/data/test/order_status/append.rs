use super::*;

fn params(order_id: i32, expected_version: i32, status: OrderStatusName) -> AppendOrderStatusParams {
    AppendOrderStatusParams {
        order_id,
        expected_version,
        status,
        comment: Some("checked by phone".to_string()),
        created_at: Utc::now(),
        changed_by: None,
    }
}

/// Tests appending with the version that was read.
///
/// Verifies that the event is inserted and the order's version is bumped.
///
/// Expected: Ok(Some(event)) and status_version 1
#[tokio::test]
async fn appends_event_and_bumps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 1).await?;

    let repo = OrderStatusRepository::new(db);
    let event = repo
        .append(params(rental.order.id, 0, OrderStatusName::Approved))
        .await?
        .unwrap();

    assert_eq!(event.order_id, rental.order.id);
    assert_eq!(event.status, OrderStatusName::Approved);
    assert_eq!(event.comment.as_deref(), Some("checked by phone"));
    assert_eq!(event.changed_by, None);

    let order = entity::prelude::Order::find_by_id(rental.order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(order.status_version, 1);

    let current = repo.get_current(rental.order.id).await?.unwrap();
    assert_eq!(current.event, event);

    Ok(())
}

/// Tests appending with a stale version.
///
/// Verifies the compare-and-swap: once one append has bumped the version, a second
/// append that read the old version writes nothing.
///
/// Expected: Ok(None) and history unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 1).await?;

    let repo = OrderStatusRepository::new(db);
    repo.append(params(rental.order.id, 0, OrderStatusName::Approved))
        .await?
        .unwrap();

    let stale = repo
        .append(params(rental.order.id, 0, OrderStatusName::Rejected))
        .await?;

    assert!(stale.is_none());
    let history = repo.get_history(rental.order.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].status, OrderStatusName::Approved);

    Ok(())
}

/// Tests appending to an order that does not exist.
///
/// Expected: Ok(None), nothing inserted
#[tokio::test]
async fn rejects_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);
    let result = repo
        .append(params(42, 0, OrderStatusName::Approved))
        .await?;

    assert!(result.is_none());
    assert!(repo.get_history(42).await?.is_empty());

    Ok(())
}

/// Expected: the event keeps the creation time it was given
#[tokio::test]
async fn stores_given_creation_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 1).await?;
    let created_at = rental.status.created_at + Duration::minutes(5);

    let repo = OrderStatusRepository::new(db);
    let event = repo
        .append(AppendOrderStatusParams {
            created_at,
            ..params(rental.order.id, 0, OrderStatusName::Approved)
        })
        .await?
        .unwrap();

    assert_eq!(event.created_at, created_at);

    Ok(())
}
