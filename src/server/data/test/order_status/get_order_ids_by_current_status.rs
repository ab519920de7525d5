use super::*;

/// Tests selecting orders by their current status only.
///
/// Verifies that an order which passed through a status earlier in its history is not
/// returned for that status.
///
/// Expected: only orders whose latest event matches
#[tokio::test]
async fn matches_current_status_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let in_review = factory::helpers::create_rental(db, owner.id, 1).await?;
    let approved =
        factory::helpers::create_rental_in_status(db, owner.id, "Approved", "Booked", 1).await?;
    let running =
        factory::helpers::create_rental_in_status(db, owner.id, "InProgress", "InUse", 1).await?;

    let repo = OrderStatusRepository::new(db);

    assert_eq!(
        repo.get_order_ids_by_current_status(OrderStatusName::InReview)
            .await?,
        vec![in_review.order.id]
    );
    assert_eq!(
        repo.get_order_ids_by_current_status(OrderStatusName::Approved)
            .await?,
        vec![approved.order.id]
    );
    assert_eq!(
        repo.get_order_ids_by_current_status(OrderStatusName::InProgress)
            .await?,
        vec![running.order.id]
    );
    assert!(repo
        .get_order_ids_by_current_status(OrderStatusName::Closed)
        .await?
        .is_empty());

    Ok(())
}

/// Tests orders whose latest events share a `created_at`.
///
/// Verifies that the filter runs per order and that the higher event ID wins a tie, the
/// same ordering `get_current` uses.
///
/// Expected: the order whose tied events end in Closed is listed as Closed only
#[tokio::test]
async fn breaks_created_at_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let tied = factory::helpers::create_rental(db, owner.id, 1).await?;
    let other = factory::helpers::create_rental(db, owner.id, 1).await?;

    let at = Utc::now();
    factory::order_status::OrderStatusFactory::new(db, tied.order.id)
        .status("Approved")
        .created_at(at)
        .build()
        .await?;
    factory::order_status::OrderStatusFactory::new(db, tied.order.id)
        .status("Closed")
        .created_at(at)
        .build()
        .await?;
    factory::order_status::OrderStatusFactory::new(db, other.order.id)
        .status("Approved")
        .created_at(at - Duration::minutes(5))
        .build()
        .await?;

    let repo = OrderStatusRepository::new(db);

    assert_eq!(
        repo.get_order_ids_by_current_status(OrderStatusName::Closed)
            .await?,
        vec![tied.order.id]
    );
    assert_eq!(
        repo.get_order_ids_by_current_status(OrderStatusName::Approved)
            .await?,
        vec![other.order.id]
    );
    assert_eq!(
        repo.get_current(tied.order.id).await?.unwrap().status(),
        OrderStatusName::Closed
    );

    Ok(())
}
