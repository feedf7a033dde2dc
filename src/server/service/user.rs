//! User service for business logic.
//!
//! This module provides the `UserService` for managing accounts. Passwords are hashed here
//! before they reach the repository, and the primary account is protected from deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::PrimaryUserConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UpdateUserParams, User},
    query::{
        catalog::{Catalog, UserOrderColumn},
        executor::{ListRequest, Page},
    },
    util::password::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `catalog` - Query catalog used for list requests
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of users along with the total matching count.
    pub async fn get_paginated(
        &self,
        request: ListRequest<UserOrderColumn>,
    ) -> Result<Page<User>, AppError> {
        let txn = self.db.begin().await?;

        let page = UserRepository::new(&txn)
            .get_paginated(self.catalog.users(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a user, hashing the plaintext password in `params`.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::PasswordHashErr)` - Password could not be hashed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let hashed = hash_password(&params.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams {
                password: hashed,
                ..params
            })
            .await?;

        txn.commit().await?;

        tracing::info!(id = user.id, username = %user.username, "Created user");

        Ok(user)
    }

    /// Applies a partial update to a user, hashing a new password if one is given.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - New username or email already taken
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let password = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .update(id, UpdateUserParams { password, ..params })
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        txn.commit().await?;

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Arguments
    /// - `requester_id` - User performing the deletion
    /// - `id` - User to delete
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AuthError::AccessDenied)` - Target is the primary user
    pub async fn delete(&self, requester_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.is_primary {
            return Err(AuthError::AccessDenied(
                requester_id,
                "User attempted to delete the primary user".to_string(),
            )
            .into());
        }

        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(id, requester_id, "Deleted user");

        Ok(())
    }

    /// Creates the primary superuser unless one already exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Primary user created on this call
    /// - `Ok(None)` - A primary user was already present
    pub async fn ensure_primary(&self, config: &PrimaryUserConfig) -> Result<Option<User>, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.primary_exists().await? {
            return Ok(None);
        }

        let user = repo
            .create(CreateUserParams {
                username: config.username.clone(),
                email: config.email.clone(),
                password: hash_password(&config.password)?,
                is_superuser: true,
                is_primary: true,
            })
            .await?;

        txn.commit().await?;

        Ok(Some(user))
    }
}
