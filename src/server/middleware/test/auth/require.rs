use super::*;

/// Tests a logged-in user with no extra permissions required.
///
/// Expected: Ok(User) with the stored role parsed
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .login("renter1")
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.login, "renter1");
    assert_eq!(result.role, Role::User);

    Ok(())
}

/// Tests a request without a user in the session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that refers to a user who no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests the staff permission for every staff role.
///
/// Expected: Ok(User) for Admin, Manager and Operator
#[tokio::test]
async fn grants_staff_permission_to_staff_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in ["Admin", "Manager", "Operator"] {
        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let auth_guard = AuthGuard::new(db, session);
        let result = auth_guard.require(&[Permission::Staff]).await?;

        assert_eq!(result.role.as_str(), role);
    }

    Ok(())
}

/// Tests the staff permission for a customer.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_staff_permission_to_user_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::Staff]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests a user row whose role is not a known role.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "Superuser").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
