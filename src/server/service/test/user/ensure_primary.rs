use super::*;

fn config() -> PrimaryUserConfig {
    PrimaryUserConfig {
        username: "admin".to_string(),
        email: "admin@example.test".to_string(),
        password: "change me".to_string(),
    }
}

/// Tests provisioning the primary user on an empty database.
///
/// Expected: Ok(Some(User)) flagged as primary superuser
#[tokio::test]
async fn creates_primary_user_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;
    let service = UserService::new(db, &catalog);

    let created = service.ensure_primary(&config()).await?.unwrap();

    assert!(created.is_primary);
    assert!(created.is_superuser);
    assert_eq!(created.username, "admin");

    let second = service.ensure_primary(&config()).await?;

    assert!(second.is_none());

    Ok(())
}
