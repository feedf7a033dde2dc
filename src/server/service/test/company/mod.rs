use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    error::{query::QueryError, AppError},
    query::catalog::Catalog,
    service::company::CompanyService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete_many;
