use super::*;

/// Tests that registration stores a hash rather than the plaintext password.
///
/// Expected: Ok(User) whose stored password verifies against the plaintext
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    UserService::new(db, &catalog)
        .create(CreateUserParams {
            username: "chell".to_string(),
            email: "chell@aperture.test".to_string(),
            password: "the cake".to_string(),
            is_superuser: false,
            is_primary: false,
        })
        .await?;

    let (_, hash) = crate::server::data::user::UserRepository::new(db)
        .get_credentials("chell")
        .await?
        .unwrap();
    assert_ne!(hash, "the cake");
    assert!(crate::server::util::password::verify_password("the cake", &hash));

    Ok(())
}

/// Tests that changing the password replaces the stored hash.
///
/// Expected: Ok(User) and the new password verifies while the old one does not
#[tokio::test]
async fn update_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let service = UserService::new(db, &catalog);
    let user = service
        .create(CreateUserParams {
            username: "wheatley".to_string(),
            email: "wheatley@aperture.test".to_string(),
            password: "old secret".to_string(),
            is_superuser: false,
            is_primary: false,
        })
        .await?;

    service
        .update(
            user.id,
            UpdateUserParams {
                password: Some("new secret".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let (_, hash) = crate::server::data::user::UserRepository::new(db)
        .get_credentials("wheatley")
        .await?
        .unwrap();
    assert!(crate::server::util::password::verify_password("new secret", &hash));
    assert!(!crate::server::util::password::verify_password("old secret", &hash));

    Ok(())
}
