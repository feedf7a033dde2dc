use sea_orm::DbErr;

use crate::server::{
    data::sale::SaleRepository,
    model::sale::{CreateSaleParams, SaleFilter, UpdateSaleParams},
    query::{
        catalog::{Catalog, SaleOrderColumn},
        executor::ListRequest,
        order::OrderDirective,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
