//! Runs composed list queries against a connection.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

use crate::server::{
    error::query::QueryError,
    query::{
        composer::QueryComposer,
        descriptor::EntityDescriptor,
        filter::FilterPredicate,
        order::{parse_order, OrderDirective, SortColumn},
    },
};

/// Offset and limit of one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const MAX_LIMIT: u64 = 1000;
    /// Largest offset the database binds as a signed 64-bit integer.
    pub const MAX_OFFSET: u64 = i64::MAX as u64;

    /// Creates a page request, falling back to the defaults for missing values.
    ///
    /// Offsets beyond `MAX_OFFSET` are clamped to it and yield an empty page.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Offset and limit within bounds
    /// - `Err(QueryError::InvalidPage)` - Limit of zero or above `MAX_LIMIT`
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Result<Self, QueryError> {
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(QueryError::InvalidPage(format!(
                "limit must be between 1 and {}",
                Self::MAX_LIMIT
            )));
        }

        Ok(Self {
            offset: offset.unwrap_or(0).min(Self::MAX_OFFSET),
            limit,
        })
    }

    /// Page covering every row.
    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: i64::MAX as u64,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of results and the number of rows matching the filters overall.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Filters, ordering and page for one list request.
#[derive(Clone)]
pub struct ListRequest<C> {
    pub filters: Vec<FilterPredicate>,
    pub orders: Vec<OrderDirective<C>>,
    pub page: PageRequest,
}

impl<C: SortColumn> ListRequest<C> {
    /// Assembles a list request from raw query parameters.
    ///
    /// # Arguments
    /// - `skip` - Rows to skip, defaults to 0
    /// - `limit` - Page size, defaults to `PageRequest::DEFAULT_LIMIT`
    /// - `sort` - Comma-separated sort tokens
    /// - `filters` - Predicates built from the endpoint's filter parameters
    ///
    /// # Returns
    /// - `Ok(ListRequest)` - Parsed request
    /// - `Err(QueryError)` - Invalid sort token or page bounds
    pub fn from_params(
        skip: Option<u64>,
        limit: Option<u64>,
        sort: Option<&str>,
        filters: Vec<FilterPredicate>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            filters,
            orders: parse_order(sort)?,
            page: PageRequest::new(skip, limit)?,
        })
    }
}

impl<C> Default for ListRequest<C> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            orders: Vec::new(),
            page: PageRequest::default(),
        }
    }
}

/// Executes list queries for one entity on any connection or transaction.
pub struct QueryExecutor<'a, Db: ConnectionTrait, E: EntityTrait, C: SortColumn> {
    db: &'a Db,
    composer: QueryComposer<'a, E, C>,
}

impl<'a, Db, E, C> QueryExecutor<'a, Db, E, C>
where
    Db: ConnectionTrait,
    E: EntityTrait,
    C: SortColumn,
{
    pub fn new(db: &'a Db, descriptor: &'a EntityDescriptor<E, C>) -> Self {
        Self {
            db,
            composer: QueryComposer::new(descriptor),
        }
    }

    /// Counts the distinct base rows matching `filters`.
    pub async fn count(&self, filters: &[FilterPredicate]) -> Result<u64, DbErr> {
        let count: Option<i64> = self
            .composer
            .compose_count(filters)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(count.unwrap_or(0).max(0) as u64)
    }

    /// Fetches one page of base rows matching `filters`, sorted by `orders`.
    pub async fn fetch(
        &self,
        filters: &[FilterPredicate],
        orders: &[OrderDirective<C>],
        page: PageRequest,
    ) -> Result<Vec<E::Model>, DbErr> {
        let composed = self
            .composer
            .compose(filters, orders)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        composed
            .select
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await
    }

    /// Fetches the requested page together with the total matching count.
    pub async fn page(&self, request: &ListRequest<C>) -> Result<Page<E::Model>, DbErr> {
        let items = self
            .fetch(&request.filters, &request.orders, request.page)
            .await?;
        let total = self.count(&request.filters).await?;

        Ok(Page { items, total })
    }
}
