use super::*;

/// Tests a status-only update.
///
/// Expected: status changed, dates untouched
#[tokio::test]
async fn updates_status_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 1).await?;
    let before = &rental.equipment_statuses[0];

    let repo = EquipmentStatusRepository::new(db);
    let updated = repo
        .update(EquipmentStatusUpdate::status(
            before.id,
            EquipmentStatusName::InUse,
        ))
        .await?;

    assert_eq!(updated.status, EquipmentStatusName::InUse);
    assert_eq!(updated.start_date, before.start_date);
    assert_eq!(updated.end_date, before.end_date);

    Ok(())
}

/// Tests updating status and end date together.
///
/// Expected: both fields persisted
#[tokio::test]
async fn updates_status_and_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let rental = factory::helpers::create_rental(db, owner.id, 1).await?;
    let before = &rental.equipment_statuses[0];
    let end_date = before.end_date + Duration::days(1);

    let repo = EquipmentStatusRepository::new(db);
    repo.update(EquipmentStatusUpdate {
        id: before.id,
        status: Some(EquipmentStatusName::Available),
        start_date: None,
        end_date: Some(end_date),
    })
    .await?;

    let records = repo.get_by_order_id(rental.order.id).await?;
    assert_eq!(records[0].status, EquipmentStatusName::Available);
    assert_eq!(records[0].end_date, end_date);

    Ok(())
}

/// Expected: Err(DbErr::RecordNotFound) for an unknown record
#[tokio::test]
async fn fails_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_status_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EquipmentStatusRepository::new(db);
    let result = repo
        .update(EquipmentStatusUpdate::status(999, EquipmentStatusName::InUse))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
