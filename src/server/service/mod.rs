//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Transaction Management**: Every call runs in one transaction; dropping it before
//!   `commit` rolls back
//! - **Validation**: Resolving client-supplied relation ids before anything is written
//! - **Domain Errors**: Turning missing rows into `NotFound` and protected rows into
//!   access errors

pub mod auth;
pub mod company;
pub mod game;
pub mod genre;
pub mod platform;
pub mod sale;
pub mod user;

#[cfg(test)]
mod test;
