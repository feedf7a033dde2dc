//! SeaORM entity models for the game catalog schema.

pub mod prelude;

pub mod company;
pub mod game;
pub mod game_genre;
pub mod game_platform;
pub mod genre;
pub mod platform;
pub mod sale;
pub mod user;
