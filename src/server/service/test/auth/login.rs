use super::*;

/// Tests logging in with the right password.
///
/// Expected: Ok(User) for the matching account
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::UserFactory::new(db)
        .username("alyx")
        .hashed_password(hash_password("dog")?)
        .build()
        .await?;

    let user = AuthService::new(db).login("alyx", "dog").await?;

    assert_eq!(user.id, stored.id);

    Ok(())
}

/// Tests that a wrong password and an unknown username fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::UserFactory::new(db)
        .username("alyx")
        .hashed_password(hash_password("dog")?)
        .build()
        .await?;
    let service = AuthService::new(db);

    let wrong_password = service.login("alyx", "cat").await;
    let unknown_user = service.login("eli", "dog").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
