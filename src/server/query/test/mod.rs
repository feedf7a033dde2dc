use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::query::{
    catalog::{Catalog, GameOrderColumn, GenreOrderColumn, PlatformOrderColumn, SaleOrderColumn},
    executor::{ListRequest, PageRequest, QueryExecutor},
    filter::{FilterOp, FilterPredicate},
    order::OrderDirective,
};

mod count;
mod relation;
