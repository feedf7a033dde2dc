//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into DTOs
//! at the controller boundary. Each entity module also defines the filter type its list
//! endpoint accepts and how those filters become query predicates.

pub mod company;
pub mod game;
pub mod genre;
pub mod platform;
pub mod reference;
pub mod sale;
pub mod user;
