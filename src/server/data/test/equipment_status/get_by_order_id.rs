use super::*;

/// Tests loading the records of an order.
///
/// Verifies that records belonging to other orders or to no order are excluded.
///
/// Expected: Ok(records of the order) ordered by id
#[tokio::test]
async fn returns_records_of_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 2).await?;
    let other = factory::helpers::create_rental(db, owner.id, 1).await?;
    factory::equipment_status::EquipmentStatusFactory::new(db, rental.equipment[0].id)
        .status("NotAvailable")
        .order_id(None)
        .build()
        .await?;

    let repo = EquipmentStatusRepository::new(db);
    let records = repo.get_by_order_id(rental.order.id).await?;

    assert_eq!(records.len(), 2);
    assert_eq!(
        records.iter().map(|r| r.equipment_id).collect::<Vec<_>>(),
        rental.equipment_ids()
    );
    assert!(records
        .iter()
        .all(|r| r.status == EquipmentStatusName::Booked && r.order_id == Some(rental.order.id)));
    assert_eq!(repo.get_by_order_id(other.order.id).await?.len(), 1);

    Ok(())
}

/// Expected: Ok(empty) for an order without equipment
#[tokio::test]
async fn returns_empty_for_order_without_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 0).await?;

    let repo = EquipmentStatusRepository::new(db);

    assert!(repo.get_by_order_id(rental.order.id).await?.is_empty());

    Ok(())
}
