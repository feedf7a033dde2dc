use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::platform::PlatformRepository,
    error::AppError,
    model::platform::{CreatePlatformParams, Platform, UpdatePlatformParams},
    query::{
        catalog::{Catalog, PlatformOrderColumn},
        executor::{ListRequest, Page},
        relation::resolve_ids,
    },
};

pub struct PlatformService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> PlatformService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of platforms along with the total matching count.
    pub async fn get_paginated(
        &self,
        request: ListRequest<PlatformOrderColumn>,
    ) -> Result<Page<Platform>, AppError> {
        let txn = self.db.begin().await?;

        let page = PlatformRepository::new(&txn)
            .get_paginated(self.catalog.platforms(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a platform by ID.
    ///
    /// # Returns
    /// - `Ok(Platform)` - Platform found
    /// - `Err(AppError::NotFound)` - No platform with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Platform, AppError> {
        let txn = self.db.begin().await?;

        let platform = PlatformRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Platform not found".to_string()))?;

        txn.commit().await?;

        Ok(platform)
    }

    /// Creates a platform.
    ///
    /// # Returns
    /// - `Ok(Platform)` - Created platform
    /// - `Err(AppError::Conflict)` - Title already taken
    pub async fn create(&self, params: CreatePlatformParams) -> Result<Platform, AppError> {
        let txn = self.db.begin().await?;

        let platform = PlatformRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(platform)
    }

    /// Applies a partial update to a platform.
    ///
    /// # Returns
    /// - `Ok(Platform)` - Updated platform
    /// - `Err(AppError::NotFound)` - No platform with that ID
    /// - `Err(AppError::Conflict)` - New title already taken
    pub async fn update(&self, id: i32, params: UpdatePlatformParams) -> Result<Platform, AppError> {
        let txn = self.db.begin().await?;

        let platform = PlatformRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Platform not found".to_string()))?;

        txn.commit().await?;

        Ok(platform)
    }

    /// Deletes a platform together with its game links and sales.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !PlatformRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Platform not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes every platform in `ids`.
    ///
    /// Nothing is deleted unless every id exists.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of platforms deleted
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Lists every missing id
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<entity::prelude::Platform, _>(&txn, ids).await?;
        let deleted = PlatformRepository::new(&txn).delete_many(ids).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
