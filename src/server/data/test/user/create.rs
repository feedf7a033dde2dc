use super::*;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password: "$argon2id$placeholder".to_string(),
        is_superuser: false,
        is_primary: false,
    }
}

/// Tests creating a user.
///
/// Verifies that the stored flags and timestamps are returned on the domain model.
///
/// Expected: Ok(User) with the given username and email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(params("gordon", "gordon@blackmesa.test"))
        .await?;

    assert_eq!(user.username, "gordon");
    assert_eq!(user.email, "gordon@blackmesa.test");
    assert!(!user.is_superuser);
    assert!(!user.is_primary);

    Ok(())
}

/// Tests that a duplicate username violates the unique constraint.
///
/// Expected: Err(DbErr) recognised as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("alyx", "alyx@example.test")).await?;

    let result = repo.create(params("alyx", "other@example.test")).await;

    let err = result.err().unwrap();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
