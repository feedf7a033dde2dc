use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::genre::GenreRepository,
    error::AppError,
    model::genre::{CreateGenreParams, Genre, UpdateGenreParams},
    query::{
        catalog::{Catalog, GenreOrderColumn},
        executor::{ListRequest, Page},
        relation::resolve_ids,
    },
};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of genres along with the total matching count.
    pub async fn get_paginated(
        &self,
        request: ListRequest<GenreOrderColumn>,
    ) -> Result<Page<Genre>, AppError> {
        let txn = self.db.begin().await?;

        let page = GenreRepository::new(&txn)
            .get_paginated(self.catalog.genres(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a genre by ID.
    ///
    /// # Returns
    /// - `Ok(Genre)` - Genre found
    /// - `Err(AppError::NotFound)` - No genre with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Genre, AppError> {
        let txn = self.db.begin().await?;

        let genre = GenreRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;

        txn.commit().await?;

        Ok(genre)
    }

    /// Creates a genre.
    ///
    /// # Returns
    /// - `Ok(Genre)` - Created genre
    /// - `Err(AppError::Conflict)` - Title already taken
    pub async fn create(&self, params: CreateGenreParams) -> Result<Genre, AppError> {
        let txn = self.db.begin().await?;

        let genre = GenreRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(genre)
    }

    /// Applies a partial update to a genre.
    ///
    /// # Returns
    /// - `Ok(Genre)` - Updated genre
    /// - `Err(AppError::NotFound)` - No genre with that ID
    /// - `Err(AppError::Conflict)` - New title already taken
    pub async fn update(&self, id: i32, params: UpdateGenreParams) -> Result<Genre, AppError> {
        let txn = self.db.begin().await?;

        let genre = GenreRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Genre not found".to_string()))?;

        txn.commit().await?;

        Ok(genre)
    }

    /// Deletes a genre together with its game links.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !GenreRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Genre not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes every genre in `ids`.
    ///
    /// Nothing is deleted unless every id exists.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of genres deleted
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Lists every missing id
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<entity::prelude::Genre, _>(&txn, ids).await?;
        let deleted = GenreRepository::new(&txn).delete_many(ids).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
