use std::collections::BTreeSet;

use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    error::{query::QueryError, AppError},
    model::game::{CreateGameParams, UpdateGameParams},
    query::catalog::Catalog,
    service::game::GameService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
