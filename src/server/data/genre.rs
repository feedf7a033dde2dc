//! Genre data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::related::load_creators,
    model::genre::{CreateGenreParams, Genre, UpdateGenreParams},
    query::{
        catalog::GenreOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
    },
};

pub struct GenreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GenreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a genre by ID with its creator attached.
    ///
    /// # Returns
    /// - `Ok(Some(Genre))` - Genre found
    /// - `Ok(None)` - No genre with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let Some(genre) = entity::prelude::Genre::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let creators = load_creators(self.db, [genre.created_by_user_id]).await?;
        let creator = genre
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Genre::from_entity(genre, creator)))
    }

    /// Gets one page of genres matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - Genre descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<Genre>)` - Genres on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::Genre, GenreOrderColumn>,
        request: &ListRequest<GenreOrderColumn>,
    ) -> Result<Page<Genre>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched genres");

        let creators =
            load_creators(self.db, page.items.iter().map(|c| c.created_by_user_id).collect::<Vec<_>>()).await?;

        Ok(page.map(|genre| {
            let creator = genre
                .created_by_user_id
                .and_then(|user_id| creators.get(&user_id));
            Genre::from_entity(genre, creator)
        }))
    }

    /// Creates a new genre.
    ///
    /// # Returns
    /// - `Ok(Genre)` - The created genre with its creator attached
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn create(&self, params: CreateGenreParams) -> Result<Genre, DbErr> {
        let genre = entity::genre::ActiveModel {
            title: ActiveValue::Set(params.title),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = genre.id, "Created genre");

        let creators = load_creators(self.db, [genre.created_by_user_id]).await?;
        let creator = genre
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Genre::from_entity(genre, creator))
    }

    /// Applies a partial update to a genre.
    ///
    /// # Returns
    /// - `Ok(Some(Genre))` - The updated genre
    /// - `Ok(None)` - No genre with that ID
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGenreParams,
    ) -> Result<Option<Genre>, DbErr> {
        let Some(existing) = entity::prelude::Genre::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::genre::ActiveModel = existing.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }

        let genre = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        let creators = load_creators(self.db, [genre.created_by_user_id]).await?;
        let creator = genre
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Genre::from_entity(genre, creator)))
    }

    /// Deletes a genre together with its game links.
    ///
    /// # Returns
    /// - `Ok(true)` - Genre deleted
    /// - `Ok(false)` - No genre with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Genre::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every genre in `ids`, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Genre::delete_many()
            .filter(entity::genre::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
