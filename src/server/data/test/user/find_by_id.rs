use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(user)) with the stored role
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .login("operator1")
        .role("Operator")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?.unwrap();

    assert_eq!(found.login, "operator1");
    assert_eq!(found.role, "Operator");

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(12345).await?.is_none());

    Ok(())
}
