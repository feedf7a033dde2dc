//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. Password hashes are
//! written and read here but only leave the data layer through `get_credentials`, which the
//! login flow uses to verify a password.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    model::user::{CreateUserParams, UpdateUserParams, User},
    query::{
        catalog::UserOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets a user together with their stored password hash by username.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - User and PHC-formatted Argon2 hash
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_credentials(&self, username: &str) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|model| {
            let hash = model.hashed_password.clone();
            (User::from_entity(model), hash)
        }))
    }

    /// Checks whether the primary user has been provisioned.
    ///
    /// # Returns
    /// - `Ok(true)` - A user with `is_primary` set exists
    /// - `Ok(false)` - No primary user yet (first start)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn primary_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::IsPrimary.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of users matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - User descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users on the page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::User, UserOrderColumn>,
        request: &ListRequest<UserOrderColumn>,
    ) -> Result<Page<User>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched users");

        Ok(page.map(User::from_entity))
    }

    /// Creates a user.
    ///
    /// # Arguments
    /// - `params` - User fields; `params.password` must already be hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique username or email violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            hashed_password: ActiveValue::Set(params.password),
            is_superuser: ActiveValue::Set(params.is_superuser),
            is_primary: ActiveValue::Set(params.is_primary),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = entity.id, "Created user");

        Ok(User::from_entity(entity))
    }

    /// Applies a partial update to a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Changed fields; a new `password` must already be hashed
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including unique username or email violations
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.clone().into();
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password) = params.password {
            active.hashed_password = ActiveValue::Set(password);
        }
        if let Some(is_superuser) = params.is_superuser {
            active.is_superuser = ActiveValue::Set(is_superuser);
        }

        let entity = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user. Records they created keep existing with no creator.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
