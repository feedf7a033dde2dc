//! Platform data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::related::load_creators,
    model::platform::{CreatePlatformParams, Platform, UpdatePlatformParams},
    query::{
        catalog::PlatformOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
    },
};

pub struct PlatformRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlatformRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a platform by ID with its creator attached.
    ///
    /// # Returns
    /// - `Ok(Some(Platform))` - Platform found
    /// - `Ok(None)` - No platform with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Platform>, DbErr> {
        let Some(platform) = entity::prelude::Platform::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let creators = load_creators(self.db, [platform.created_by_user_id]).await?;
        let creator = platform
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Platform::from_entity(platform, creator)))
    }

    /// Gets one page of platforms matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - Platform descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<Platform>)` - Platforms on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::Platform, PlatformOrderColumn>,
        request: &ListRequest<PlatformOrderColumn>,
    ) -> Result<Page<Platform>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched platforms");

        let creators =
            load_creators(self.db, page.items.iter().map(|c| c.created_by_user_id).collect::<Vec<_>>()).await?;

        Ok(page.map(|platform| {
            let creator = platform
                .created_by_user_id
                .and_then(|user_id| creators.get(&user_id));
            Platform::from_entity(platform, creator)
        }))
    }

    /// Creates a new platform.
    ///
    /// # Returns
    /// - `Ok(Platform)` - The created platform with its creator attached
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn create(&self, params: CreatePlatformParams) -> Result<Platform, DbErr> {
        let platform = entity::platform::ActiveModel {
            title: ActiveValue::Set(params.title),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = platform.id, "Created platform");

        let creators = load_creators(self.db, [platform.created_by_user_id]).await?;
        let creator = platform
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Platform::from_entity(platform, creator))
    }

    /// Applies a partial update to a platform.
    ///
    /// # Returns
    /// - `Ok(Some(Platform))` - The updated platform
    /// - `Ok(None)` - No platform with that ID
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn update(
        &self,
        id: i32,
        params: UpdatePlatformParams,
    ) -> Result<Option<Platform>, DbErr> {
        let Some(existing) = entity::prelude::Platform::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::platform::ActiveModel = existing.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }

        let platform = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        let creators = load_creators(self.db, [platform.created_by_user_id]).await?;
        let creator = platform
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Platform::from_entity(platform, creator)))
    }

    /// Deletes a platform together with its game links and sales.
    ///
    /// # Returns
    /// - `Ok(true)` - Platform deleted
    /// - `Ok(false)` - No platform with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Platform::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every platform in `ids`, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Platform::delete_many()
            .filter(entity::platform::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
