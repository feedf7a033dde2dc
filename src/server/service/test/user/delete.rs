use super::*;

/// Tests that the primary user cannot be deleted, even by itself.
///
/// Expected: Err(AuthError::AccessDenied) and the user still present
#[tokio::test]
async fn primary_user_is_protected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let primary = factory::UserFactory::new(db)
        .superuser(true)
        .primary(true)
        .build()
        .await?;
    let service = UserService::new(db, &catalog);

    let result = service.delete(primary.id, primary.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(service.get_by_id(primary.id).await.is_ok());

    Ok(())
}

/// Tests deleting a regular user.
///
/// Expected: Ok(()) and the user is gone
#[tokio::test]
async fn deletes_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let admin = factory::UserFactory::new(db).superuser(true).build().await?;
    let user = factory::create_user(db).await?;
    let service = UserService::new(db, &catalog);

    service.delete(admin.id, user.id).await?;

    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let result = UserService::new(db, &catalog).delete(1, 31).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
