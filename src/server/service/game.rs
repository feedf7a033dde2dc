use std::collections::BTreeSet;

use entity::prelude::{Company, Genre, Platform};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParams, Game, UpdateGameParams},
    query::{
        catalog::{Catalog, GameOrderColumn},
        executor::{ListRequest, Page},
        relation::resolve_ids,
    },
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of games with company, platforms and genres attached.
    pub async fn get_paginated(
        &self,
        request: ListRequest<GameOrderColumn>,
    ) -> Result<Page<Game>, AppError> {
        let txn = self.db.begin().await?;

        let page = GameRepository::new(&txn)
            .get_paginated(self.catalog.games(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a game by ID.
    ///
    /// # Returns
    /// - `Ok(Game)` - Game found
    /// - `Err(AppError::NotFound)` - No game with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        let game = GameRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

        txn.commit().await?;

        Ok(game)
    }

    /// Creates a game linked to its company, platforms and genres.
    ///
    /// # Returns
    /// - `Ok(Game)` - Created game
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Company, platform or genre ids missing
    /// - `Err(AppError::Conflict)` - Title already taken
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<Company, _>(&txn, &[params.created_by_company_id]).await?;
        resolve_relations(&txn, Some(&params.platform_ids), Some(&params.genre_ids)).await?;

        let game = GameRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(game)
    }

    /// Applies a partial update to a game.
    ///
    /// Relation ids are verified before anything is written, so a missing id leaves the game
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(Game)` - Updated game
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Company, platform or genre ids missing
    /// - `Err(AppError::Conflict)` - New title already taken
    pub async fn update(&self, id: i32, params: UpdateGameParams) -> Result<Game, AppError> {
        let txn = self.db.begin().await?;

        if let Some(company_id) = params.created_by_company_id {
            resolve_ids::<Company, _>(&txn, &[company_id]).await?;
        }
        resolve_relations(&txn, params.platform_ids.as_ref(), params.genre_ids.as_ref()).await?;

        let game = GameRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

        txn.commit().await?;

        Ok(game)
    }

    /// Deletes a game together with its links and sales.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !GameRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes every game in `ids`, or none if any id is missing.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<entity::prelude::Game, _>(&txn, ids).await?;
        let deleted = GameRepository::new(&txn).delete_many(ids).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}

/// Verifies that every platform and genre id exists.
async fn resolve_relations<C: ConnectionTrait>(
    db: &C,
    platform_ids: Option<&BTreeSet<i32>>,
    genre_ids: Option<&BTreeSet<i32>>,
) -> Result<(), AppError> {
    if let Some(ids) = platform_ids {
        let ids: Vec<i32> = ids.iter().copied().collect();
        resolve_ids::<Platform, _>(db, &ids).await?;
    }
    if let Some(ids) = genre_ids {
        let ids: Vec<i32> = ids.iter().copied().collect();
        resolve_ids::<Genre, _>(db, &ids).await?;
    }

    Ok(())
}
