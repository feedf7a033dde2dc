use super::*;

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that points at a user who no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, 404),
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that any authenticated user with a database record passes when no permission
/// is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::UserFactory::new(db).username("regular").build().await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.username, "regular");

    Ok(())
}

/// Tests the superuser permission.
///
/// Expected: Ok(User) for a superuser, Err(AuthError::AccessDenied) for a regular user
#[tokio::test]
async fn superuser_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::UserFactory::new(db).superuser(true).build().await?;
    let regular = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(admin.id).await?;
    let granted = guard.require(&[Permission::Superuser]).await?;
    assert!(granted.is_superuser);

    auth_session.set_user_id(regular.id).await?;
    let denied = guard.require(&[Permission::Superuser]).await;
    match denied {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, regular.id)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests acting on one's own account versus someone else's.
///
/// Verifies that a regular user passes for their own id only, while a superuser passes for
/// any id.
///
/// Expected: Ok for self and for the superuser, Err(AuthError::AccessDenied) otherwise
#[tokio::test]
async fn self_or_superuser_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::UserFactory::new(db).superuser(true).build().await?;
    let regular = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(regular.id).await?;
    assert!(guard
        .require(&[Permission::SelfOrSuperuser(regular.id)])
        .await
        .is_ok());
    assert!(matches!(
        guard
            .require(&[Permission::SelfOrSuperuser(other.id)])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    assert!(guard
        .require(&[Permission::SelfOrSuperuser(other.id)])
        .await
        .is_ok());

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// Expected: Err(AuthError::AccessDenied) when the user owns the target but is not a
/// superuser
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrSuperuser(user.id), Permission::Superuser])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
