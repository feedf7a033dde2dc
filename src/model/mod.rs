//! Request and response bodies shared by the HTTP API and its OpenAPI documentation.

pub mod api;
pub mod company;
pub mod game;
pub mod genre;
pub mod platform;
pub mod sale;
pub mod user;
