use crate::server::{
    config::PrimaryUserConfig,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, UpdateUserParams},
    query::catalog::Catalog,
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod ensure_primary;
