use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
    query::{
        catalog::{Catalog, UserOrderColumn},
        executor::ListRequest,
        order::OrderDirective,
    },
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_credentials;
mod get_paginated;
mod primary_exists;
mod update;
