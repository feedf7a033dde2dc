use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};

use crate::server::{
    data::company::CompanyRepository,
    model::company::{CompanyFilter, CreateCompanyParams, UpdateCompanyParams},
    query::{
        catalog::{Catalog, CompanyOrderColumn},
        executor::ListRequest,
        order::OrderDirective,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
