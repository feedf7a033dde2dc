//! Game data repository.
//!
//! Games carry the most related data: a company, an optional creator, and many-to-many links
//! to platforms and genres. Reads attach all of it in bulk, one query per relation regardless
//! of page size. Writes replace link sets by diff so unchanged links are never rewritten.

use std::collections::HashMap;

use entity::{
    game_genre, game_platform,
    prelude::{Company, GameGenre, GamePlatform, Genre, Platform},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::related::{load_by_ids, load_creators},
    model::{
        game::{CreateGameParams, Game, UpdateGameParams},
        reference::{TitledRef, UserRef},
    },
    query::{
        catalog::GameOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
        relation::Junction,
    },
};

fn platform_links() -> Junction<GamePlatform> {
    Junction::new(
        game_platform::Column::GameId,
        game_platform::Column::PlatformId,
        |game_id, platform_id| game_platform::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            platform_id: ActiveValue::Set(platform_id),
        },
    )
}

fn genre_links() -> Junction<GameGenre> {
    Junction::new(
        game_genre::Column::GameId,
        game_genre::Column::GenreId,
        |game_id, genre_id| game_genre::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            genre_id: ActiveValue::Set(genre_id),
        },
    )
}

pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a game by ID with company, creator, platforms and genres attached.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![game]).await?.pop())
    }

    /// Gets one page of games matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - Game descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<Game>)` - Games on the page, in query order, and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::Game, GameOrderColumn>,
        request: &ListRequest<GameOrderColumn>,
    ) -> Result<Page<Game>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched games");

        Ok(Page {
            items: self.hydrate(page.items).await?,
            total: page.total,
        })
    }

    /// Creates a game and links it to the given platforms and genres.
    ///
    /// The caller is responsible for verifying that the company, platforms and genres exist.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game with all relations attached
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr> {
        let game = entity::game::ActiveModel {
            title: ActiveValue::Set(params.title),
            released_at: ActiveValue::Set(params.released_at),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            created_by_company_id: ActiveValue::Set(params.created_by_company_id),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let platform_ids: Vec<i32> = params.platform_ids.into_iter().collect();
        let genre_ids: Vec<i32> = params.genre_ids.into_iter().collect();
        platform_links().attach(self.db, game.id, &platform_ids).await?;
        genre_links().attach(self.db, game.id, &genre_ids).await?;
        tracing::debug!(
            id = game.id,
            platforms = platform_ids.len(),
            genres = genre_ids.len(),
            "Created game"
        );

        self.hydrate_one(game).await
    }

    /// Applies a partial update to a game.
    ///
    /// Relation sets given in `params` replace the current links; only links that differ
    /// are inserted or deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn update(&self, id: i32, params: UpdateGameParams) -> Result<Option<Game>, DbErr> {
        let Some(existing) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::game::ActiveModel = existing.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(released_at) = params.released_at {
            active.released_at = ActiveValue::Set(released_at);
        }
        if let Some(company_id) = params.created_by_company_id {
            active.created_by_company_id = ActiveValue::Set(company_id);
        }

        let game = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        if let Some(platform_ids) = params.platform_ids {
            let diff = platform_links().replace(self.db, id, &platform_ids).await?;
            tracing::debug!(id, ?diff, "Replaced game platforms");
        }
        if let Some(genre_ids) = params.genre_ids {
            let diff = genre_links().replace(self.db, id, &genre_ids).await?;
            tracing::debug!(id, ?diff, "Replaced game genres");
        }

        self.hydrate_one(game).await.map(Some)
    }

    /// Deletes a game together with its links and sales.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every game in `ids`, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::delete_many()
            .filter(entity::game::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn hydrate_one(&self, game: entity::game::Model) -> Result<Game, DbErr> {
        let id = game.id;

        self.hydrate(vec![game])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!("Game {} not found after write", id)))
    }

    /// Attaches company, creator, platforms and genres to `games`, preserving their order.
    async fn hydrate(&self, games: Vec<entity::game::Model>) -> Result<Vec<Game>, DbErr> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = games.iter().map(|g| g.id).collect();

        let companies =
            load_by_ids::<Company, _>(self.db, games.iter().map(|g| g.created_by_company_id))
                .await?;
        let creators = load_creators(self.db, games.iter().map(|g| g.created_by_user_id).collect::<Vec<_>>()).await?;

        let platform_rows = GamePlatform::find()
            .filter(game_platform::Column::GameId.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;
        let platforms =
            load_by_ids::<Platform, _>(self.db, platform_rows.iter().map(|l| l.platform_id))
                .await?;

        let genre_rows = GameGenre::find()
            .filter(game_genre::Column::GameId.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;
        let genres =
            load_by_ids::<Genre, _>(self.db, genre_rows.iter().map(|l| l.genre_id)).await?;

        let mut platforms_by_game: HashMap<i32, Vec<TitledRef>> = HashMap::new();
        for link in &platform_rows {
            if let Some(platform) = platforms.get(&link.platform_id) {
                platforms_by_game
                    .entry(link.game_id)
                    .or_default()
                    .push(TitledRef::new(platform.id, &platform.title));
            }
        }

        let mut genres_by_game: HashMap<i32, Vec<TitledRef>> = HashMap::new();
        for link in &genre_rows {
            if let Some(genre) = genres.get(&link.genre_id) {
                genres_by_game
                    .entry(link.game_id)
                    .or_default()
                    .push(TitledRef::new(genre.id, &genre.title));
            }
        }

        games
            .into_iter()
            .map(|game| {
                let company = companies.get(&game.created_by_company_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Company {} for game {} not found",
                        game.created_by_company_id, game.id
                    ))
                })?;

                let mut platforms = platforms_by_game.remove(&game.id).unwrap_or_default();
                platforms.sort_by_key(|p| p.id);
                let mut genres = genres_by_game.remove(&game.id).unwrap_or_default();
                genres.sort_by_key(|g| g.id);

                Ok(Game {
                    id: game.id,
                    title: game.title,
                    released_at: game.released_at,
                    created_at: game.created_at,
                    created_by_company: TitledRef::new(company.id, &company.title),
                    created_by_user: game
                        .created_by_user_id
                        .and_then(|user_id| creators.get(&user_id))
                        .map(UserRef::from_entity),
                    platforms,
                    genres,
                })
            })
            .collect()
    }
}
