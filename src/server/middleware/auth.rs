use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// May create, modify and delete catalog records and other users.
    Superuser,
    /// Is the given user, or a superuser acting on their behalf.
    SelfOrSuperuser(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Superuser => {
                    if !user.is_superuser {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a superuser-only action".to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrSuperuser(target_id) => {
                    if user.id != *target_id && !user.is_superuser {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User attempted to modify user {}", target_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
