use entity::prelude::{Game, Platform};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::sale::SaleRepository,
    error::AppError,
    model::sale::{CreateSaleParams, Sale, UpdateSaleParams},
    query::{
        catalog::{Catalog, SaleOrderColumn},
        executor::{ListRequest, Page},
        relation::resolve_ids,
    },
};

pub struct SaleService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> SaleService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of sales along with the total matching count.
    pub async fn get_paginated(
        &self,
        request: ListRequest<SaleOrderColumn>,
    ) -> Result<Page<Sale>, AppError> {
        let txn = self.db.begin().await?;

        let page = SaleRepository::new(&txn)
            .get_paginated(self.catalog.sales(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a sale by ID.
    ///
    /// # Returns
    /// - `Ok(Sale)` - Sale found
    /// - `Err(AppError::NotFound)` - No sale with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Sale, AppError> {
        let txn = self.db.begin().await?;

        let sale = SaleRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

        txn.commit().await?;

        Ok(sale)
    }

    /// Records a sale of a game on a platform.
    ///
    /// # Returns
    /// - `Ok(Sale)` - Created sale
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Game or platform missing
    /// - `Err(AppError::Conflict)` - A sale for this game and platform already exists
    pub async fn create(&self, params: CreateSaleParams) -> Result<Sale, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<Game, _>(&txn, &[params.game_id]).await?;
        resolve_ids::<Platform, _>(&txn, &[params.platform_id]).await?;

        let sale = SaleRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(sale)
    }

    /// Applies a partial update to a sale.
    ///
    /// # Returns
    /// - `Ok(Sale)` - Updated sale
    /// - `Err(AppError::NotFound)` - No sale with that ID
    /// - `Err(AppError::QueryErr(RelationNotFound))` - New game or platform missing
    /// - `Err(AppError::Conflict)` - Another sale already covers the game and platform
    pub async fn update(&self, id: i32, params: UpdateSaleParams) -> Result<Sale, AppError> {
        let txn = self.db.begin().await?;

        if let Some(game_id) = params.game_id {
            resolve_ids::<Game, _>(&txn, &[game_id]).await?;
        }
        if let Some(platform_id) = params.platform_id {
            resolve_ids::<Platform, _>(&txn, &[platform_id]).await?;
        }

        let sale = SaleRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

        txn.commit().await?;

        Ok(sale)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !SaleRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Sale not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes every sale in `ids`, or none if any id is missing.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<entity::prelude::Sale, _>(&txn, ids).await?;
        let deleted = SaleRepository::new(&txn).delete_many(ids).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
