//! Sale data repository.

use entity::prelude::{Game, Platform};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::related::{load_by_ids, load_creators},
    model::{
        reference::{TitledRef, UserRef},
        sale::{CreateSaleParams, Sale, UpdateSaleParams},
    },
    query::{
        catalog::SaleOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
    },
};

pub struct SaleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SaleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a sale by ID with its game, platform and creator attached.
    ///
    /// # Returns
    /// - `Ok(Some(Sale))` - Sale found
    /// - `Ok(None)` - No sale with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Sale>, DbErr> {
        let Some(sale) = entity::prelude::Sale::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![sale]).await?.pop())
    }

    /// Gets one page of sales matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - Sale descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<Sale>)` - Sales on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::Sale, SaleOrderColumn>,
        request: &ListRequest<SaleOrderColumn>,
    ) -> Result<Page<Sale>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched sales");

        Ok(Page {
            items: self.hydrate(page.items).await?,
            total: page.total,
        })
    }

    /// Records a sale. The caller verifies that the game and platform exist.
    pub async fn create(&self, params: CreateSaleParams) -> Result<Sale, DbErr> {
        let sale = entity::sale::ActiveModel {
            amount: ActiveValue::Set(params.amount),
            game_id: ActiveValue::Set(params.game_id),
            platform_id: ActiveValue::Set(params.platform_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = sale.id, amount = sale.amount, "Created sale");

        self.hydrate_one(sale).await
    }

    /// Applies a partial update to a sale.
    ///
    /// # Returns
    /// - `Ok(Some(Sale))` - The updated sale
    /// - `Ok(None)` - No sale with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateSaleParams) -> Result<Option<Sale>, DbErr> {
        let Some(existing) = entity::prelude::Sale::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::sale::ActiveModel = existing.clone().into();
        if let Some(amount) = params.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(game_id) = params.game_id {
            active.game_id = ActiveValue::Set(game_id);
        }
        if let Some(platform_id) = params.platform_id {
            active.platform_id = ActiveValue::Set(platform_id);
        }

        let sale = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        self.hydrate_one(sale).await.map(Some)
    }

    /// Deletes a sale.
    ///
    /// # Returns
    /// - `Ok(true)` - Sale deleted
    /// - `Ok(false)` - No sale with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Sale::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every sale in `ids`, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Sale::delete_many()
            .filter(entity::sale::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn hydrate_one(&self, sale: entity::sale::Model) -> Result<Sale, DbErr> {
        let id = sale.id;

        self.hydrate(vec![sale])
            .await?
            .pop()
            .ok_or(DbErr::RecordNotFound(format!("Sale {} not found after write", id)))
    }

    async fn hydrate(&self, sales: Vec<entity::sale::Model>) -> Result<Vec<Sale>, DbErr> {
        if sales.is_empty() {
            return Ok(Vec::new());
        }

        let games = load_by_ids::<Game, _>(self.db, sales.iter().map(|s| s.game_id)).await?;
        let platforms =
            load_by_ids::<Platform, _>(self.db, sales.iter().map(|s| s.platform_id)).await?;
        let creators = load_creators(self.db, sales.iter().map(|s| s.created_by_user_id).collect::<Vec<_>>()).await?;

        sales
            .into_iter()
            .map(|sale| {
                let game = games.get(&sale.game_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Game {} for sale {} not found",
                        sale.game_id, sale.id
                    ))
                })?;
                let platform = platforms.get(&sale.platform_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Platform {} for sale {} not found",
                        sale.platform_id, sale.id
                    ))
                })?;

                Ok(Sale {
                    id: sale.id,
                    amount: sale.amount,
                    created_at: sale.created_at,
                    game: TitledRef::new(game.id, &game.title),
                    platform: TitledRef::new(platform.id, &platform.title),
                    created_by_user: sale
                        .created_by_user_id
                        .and_then(|user_id| creators.get(&user_id))
                        .map(UserRef::from_entity),
                })
            })
            .collect()
    }
}
