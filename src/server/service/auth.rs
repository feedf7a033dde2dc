use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service for password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password pair.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - No such user or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some((user, hash)) = UserRepository::new(self.db)
            .get_credentials(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(id = user.id, "User logged in");

        Ok(user)
    }
}
