//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique titles and usernames in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a game to a platform through the `game_platform` junction table.
///
/// # Arguments
/// - `db` - Database connection
/// - `game_id` - ID of the game
/// - `platform_id` - ID of the platform
///
/// # Returns
/// - `Ok(entity::game_platform::Model)` - Created junction row
/// - `Err(DbErr)` - Database error during insert
pub async fn link_game_platform(
    db: &DatabaseConnection,
    game_id: i32,
    platform_id: i32,
) -> Result<entity::game_platform::Model, DbErr> {
    entity::game_platform::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        platform_id: ActiveValue::Set(platform_id),
    }
    .insert(db)
    .await
}

/// Links a game to a genre through the `game_genre` junction table.
///
/// # Arguments
/// - `db` - Database connection
/// - `game_id` - ID of the game
/// - `genre_id` - ID of the genre
///
/// # Returns
/// - `Ok(entity::game_genre::Model)` - Created junction row
/// - `Err(DbErr)` - Database error during insert
pub async fn link_game_genre(
    db: &DatabaseConnection,
    game_id: i32,
    genre_id: i32,
) -> Result<entity::game_genre::Model, DbErr> {
    entity::game_genre::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        genre_id: ActiveValue::Set(genre_id),
    }
    .insert(db)
    .await
}
