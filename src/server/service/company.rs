use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::company::CompanyRepository,
    error::AppError,
    model::company::{Company, CreateCompanyParams, UpdateCompanyParams},
    query::{
        catalog::{Catalog, CompanyOrderColumn},
        executor::{ListRequest, Page},
        relation::resolve_ids,
    },
};

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Gets one page of companies along with the total matching count.
    pub async fn get_paginated(
        &self,
        request: ListRequest<CompanyOrderColumn>,
    ) -> Result<Page<Company>, AppError> {
        let txn = self.db.begin().await?;

        let page = CompanyRepository::new(&txn)
            .get_paginated(self.catalog.companies(), &request)
            .await?;

        txn.commit().await?;

        Ok(page)
    }

    /// Gets a company by ID.
    ///
    /// # Returns
    /// - `Ok(Company)` - Company found
    /// - `Err(AppError::NotFound)` - No company with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Company, AppError> {
        let txn = self.db.begin().await?;

        let company = CompanyRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        txn.commit().await?;

        Ok(company)
    }

    /// Creates a company.
    ///
    /// # Returns
    /// - `Ok(Company)` - Created company
    /// - `Err(AppError::Conflict)` - Title already taken
    pub async fn create(&self, params: CreateCompanyParams) -> Result<Company, AppError> {
        let txn = self.db.begin().await?;

        let company = CompanyRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        Ok(company)
    }

    /// Applies a partial update to a company.
    ///
    /// # Returns
    /// - `Ok(Company)` - Updated company
    /// - `Err(AppError::NotFound)` - No company with that ID
    /// - `Err(AppError::Conflict)` - New title already taken
    pub async fn update(&self, id: i32, params: UpdateCompanyParams) -> Result<Company, AppError> {
        let txn = self.db.begin().await?;

        let company = CompanyRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        txn.commit().await?;

        Ok(company)
    }

    /// Deletes a company and its games.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !CompanyRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Company not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes every company in `ids`.
    ///
    /// Nothing is deleted unless every id exists.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of companies deleted
    /// - `Err(AppError::QueryErr(RelationNotFound))` - Lists every missing id
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        resolve_ids::<entity::prelude::Company, _>(&txn, ids).await?;
        let deleted = CompanyRepository::new(&txn).delete_many(ids).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
