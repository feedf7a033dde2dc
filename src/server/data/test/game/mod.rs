use std::collections::BTreeSet;

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::{
    data::game::GameRepository,
    model::game::{CreateGameParams, GameFilter, UpdateGameParams},
    query::{
        catalog::{Catalog, GameOrderColumn},
        executor::ListRequest,
        order::OrderDirective,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
