use super::*;

/// Tests loading a user's password hash by username.
///
/// Expected: Ok(Some((User, hash))) with the stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::UserFactory::new(db)
        .username("barney")
        .hashed_password("$argon2id$stored")
        .build()
        .await?;

    let result = UserRepository::new(db).get_credentials("barney").await?;

    let (user, hash) = result.unwrap();
    assert_eq!(user.id, stored.id);
    assert_eq!(hash, "$argon2id$stored");

    Ok(())
}

/// Tests that usernames are matched exactly.
///
/// Expected: Ok(None) for an unknown username
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::UserFactory::new(db).username("barney").build().await?;

    let result = UserRepository::new(db).get_credentials("barn").await?;

    assert!(result.is_none());

    Ok(())
}
