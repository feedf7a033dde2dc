//! Database repository layer for all catalog entities.
//!
//! Repositories wrap SeaORM and return domain models from `server::model`. They are generic
//! over `ConnectionTrait`, so the same code runs on the connection pool or inside a
//! transaction opened by the service layer.

pub mod company;
pub mod game;
pub mod genre;
pub mod platform;
pub mod related;
pub mod sale;
pub mod user;

#[cfg(test)]
mod test;
