use crate::server::{
    data::status_name::StatusNameRepository,
    model::{equipment_status::EquipmentStatusName, order_status::OrderStatusName},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests that the seeded order status names match the domain vocabulary.
///
/// Expected: all eight names, alphabetically
#[tokio::test]
async fn returns_seeded_order_status_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_status_name_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusNameRepository::new(db);
    let names = repo.get_order_status_names().await?;

    let mut expected: Vec<String> = OrderStatusName::ALL.iter().map(|n| n.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected);

    Ok(())
}

/// Expected: all four equipment status names, alphabetically
#[tokio::test]
async fn returns_seeded_equipment_status_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_status_name_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusNameRepository::new(db);
    let names = repo.get_equipment_status_names().await?;

    let expected: Vec<String> = EquipmentStatusName::ALL
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, expected);

    Ok(())
}

/// Expected: Ok(empty) before the tables are seeded
#[tokio::test]
async fn returns_empty_without_seed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::OrderStatusName)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatusNameRepository::new(db);

    assert!(repo.get_order_status_names().await?.is_empty());

    Ok(())
}
