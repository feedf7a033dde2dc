//! Company data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{
    data::related::load_creators,
    model::company::{Company, CreateCompanyParams, UpdateCompanyParams},
    query::{
        catalog::CompanyOrderColumn,
        descriptor::EntityDescriptor,
        executor::{ListRequest, Page, QueryExecutor},
    },
};

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a company by ID with its creator attached.
    ///
    /// # Returns
    /// - `Ok(Some(Company))` - Company found
    /// - `Ok(None)` - No company with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let Some(company) = entity::prelude::Company::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let creators = load_creators(self.db, [company.created_by_user_id]).await?;
        let creator = company
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Company::from_entity(company, creator)))
    }

    /// Gets one page of companies matching the request's filters and ordering.
    ///
    /// # Arguments
    /// - `descriptor` - Company descriptor from the query catalog
    /// - `request` - Filters, sort directives and page bounds
    ///
    /// # Returns
    /// - `Ok(Page<Company>)` - Companies on the page and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        descriptor: &EntityDescriptor<entity::prelude::Company, CompanyOrderColumn>,
        request: &ListRequest<CompanyOrderColumn>,
    ) -> Result<Page<Company>, DbErr> {
        let page = QueryExecutor::new(self.db, descriptor).page(request).await?;
        tracing::debug!(count = page.items.len(), total = page.total, "Fetched companies");

        let creators =
            load_creators(self.db, page.items.iter().map(|c| c.created_by_user_id).collect::<Vec<_>>()).await?;

        Ok(page.map(|company| {
            let creator = company
                .created_by_user_id
                .and_then(|user_id| creators.get(&user_id));
            Company::from_entity(company, creator)
        }))
    }

    /// Creates a new company.
    ///
    /// # Returns
    /// - `Ok(Company)` - The created company with its creator attached
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn create(&self, params: CreateCompanyParams) -> Result<Company, DbErr> {
        let company = entity::company::ActiveModel {
            title: ActiveValue::Set(params.title),
            founded_at: ActiveValue::Set(params.founded_at),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        tracing::debug!(id = company.id, "Created company");

        let creators = load_creators(self.db, [company.created_by_user_id]).await?;
        let creator = company
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Company::from_entity(company, creator))
    }

    /// Applies a partial update to a company.
    ///
    /// # Returns
    /// - `Ok(Some(Company))` - The updated company
    /// - `Ok(None)` - No company with that ID
    /// - `Err(DbErr)` - Database error, including unique title violations
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCompanyParams,
    ) -> Result<Option<Company>, DbErr> {
        let Some(existing) = entity::prelude::Company::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::company::ActiveModel = existing.clone().into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(founded_at) = params.founded_at {
            active.founded_at = ActiveValue::Set(founded_at);
        }

        let company = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };

        let creators = load_creators(self.db, [company.created_by_user_id]).await?;
        let creator = company
            .created_by_user_id
            .and_then(|user_id| creators.get(&user_id));

        Ok(Some(Company::from_entity(company, creator)))
    }

    /// Deletes a company and, through the foreign key cascade, its games.
    ///
    /// # Returns
    /// - `Ok(true)` - Company deleted
    /// - `Ok(false)` - No company with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Company::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every company in `ids`, returning the number of rows removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::Company::delete_many()
            .filter(entity::company::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
