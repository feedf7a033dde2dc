use super::*;

/// Tests detecting the primary user.
///
/// Expected: Ok(false) before and Ok(true) after a primary user is created
#[tokio::test]
async fn detects_primary_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::UserFactory::new(db).superuser(true).build().await?;

    assert!(!repo.primary_exists().await?);

    factory::UserFactory::new(db)
        .superuser(true)
        .primary(true)
        .build()
        .await?;

    assert!(repo.primary_exists().await?);

    Ok(())
}
