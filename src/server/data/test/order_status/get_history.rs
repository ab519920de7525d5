use super::*;

/// Tests history ordering when events were inserted out of creation order.
///
/// Expected: events sorted by created_at ascending
#[tokio::test]
async fn returns_events_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let order = factory::create_order(db, owner.id).await?;
    let start = Utc::now() - Duration::days(3);

    for (offset, status) in [(2, "Prepared"), (0, "InReview"), (1, "Approved")] {
        factory::order_status::OrderStatusFactory::new(db, order.id)
            .status(status)
            .created_at(start + Duration::days(offset))
            .build()
            .await?;
    }

    let repo = OrderStatusRepository::new(db);
    let history = repo.get_history(order.id).await?;

    let statuses: Vec<_> = history.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatusName::InReview,
            OrderStatusName::Approved,
            OrderStatusName::Prepared,
        ]
    );

    Ok(())
}

/// Tests that history is scoped to one order.
///
/// Expected: only the requested order's events
#[tokio::test]
async fn excludes_other_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::helpers::create_rental(db, owner.id, 1).await?;
    let second =
        factory::helpers::create_rental_in_status(db, owner.id, "Approved", "Booked", 1).await?;

    let repo = OrderStatusRepository::new(db);
    let history = repo.get_history(first.order.id).await?;

    assert_eq!(history.len(), 1);
    assert!(history.iter().all(|e| e.order_id == first.order.id));
    assert_eq!(repo.get_history(second.order.id).await?.len(), 2);

    Ok(())
}

/// Expected: Ok(empty) for an order without events
#[tokio::test]
async fn returns_empty_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);

    assert!(repo.get_history(1).await?.is_empty());

    Ok(())
}
