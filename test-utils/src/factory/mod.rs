//! Factory methods for creating test data.
//!
//! Each catalog entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories that need a parent
//! row (a game needs a company, a sale needs a game and a platform) create one with defaults
//! unless the test supplies it.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let game = factory::GameFactory::new(&db)
//!         .title("Half-Life")
//!         .created_by_user(user.id)
//!         .build()
//!         .await?;
//!
//!     factory::link_game_platform(&db, game.id, platform.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod company;
pub mod game;
pub mod genre;
pub mod helpers;
pub mod platform;
pub mod sale;
pub mod user;

pub use company::{create_company, CompanyFactory};
pub use game::{create_game, GameFactory};
pub use genre::{create_genre, GenreFactory};
pub use helpers::{link_game_genre, link_game_platform};
pub use platform::{create_platform, PlatformFactory};
pub use sale::{create_sale, SaleFactory};
pub use user::{create_user, UserFactory};
