use super::*;

/// Tests a partial update of a user.
///
/// Verifies that only the given fields change.
///
/// Expected: Ok(Some(User)) with the new email and the old username
#[tokio::test]
async fn updates_given_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::UserFactory::new(db).username("eli").build().await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                email: Some("eli@vance.test".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "eli");
    assert_eq!(updated.email, "eli@vance.test");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(42, UpdateUserParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
