use std::collections::BTreeSet;

use sea_orm::{ActiveValue, EntityTrait};

use super::*;
use crate::server::query::relation::{Junction, RelationDiff};

fn genre_links() -> Junction<entity::prelude::GameGenre> {
    Junction::new(
        entity::game_genre::Column::GameId,
        entity::game_genre::Column::GenreId,
        |game_id, genre_id| entity::game_genre::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            genre_id: ActiveValue::Set(genre_id),
        },
    )
}

/// Sales keyed by (game, platform) used as a link table whose rows carry their own id and
/// amount, so a rewritten row is distinguishable from an untouched one.
fn sale_links() -> Junction<entity::prelude::Sale> {
    Junction::new(
        entity::sale::Column::GameId,
        entity::sale::Column::PlatformId,
        |game_id, platform_id| entity::sale::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            platform_id: ActiveValue::Set(platform_id),
            amount: ActiveValue::Set(0),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        },
    )
}

/// Tests replacing genres {A, B} with {B, C}.
///
/// Verifies that the returned diff holds exactly one addition and one removal.
///
/// Expected: Ok(RelationDiff) adding C and removing A, with links {B, C} afterwards
#[tokio::test]
async fn replace_returns_minimal_diff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let a = factory::create_genre(db).await?;
    let b = factory::create_genre(db).await?;
    let c = factory::create_genre(db).await?;
    factory::link_game_genre(db, game.id, a.id).await?;
    factory::link_game_genre(db, game.id, b.id).await?;

    let links = genre_links();
    let diff = links
        .replace(db, game.id, &BTreeSet::from([b.id, c.id]))
        .await?;

    assert_eq!(
        diff,
        RelationDiff {
            additions: vec![c.id],
            removals: vec![a.id],
        }
    );
    assert_eq!(
        links.current(db, game.id).await?,
        BTreeSet::from([b.id, c.id])
    );

    Ok(())
}

/// Tests that a link present in both sets is never rewritten.
///
/// Verifies that the row kept across the replacement retains its id and amount, which a
/// delete-and-reinsert would reset.
///
/// Expected: Ok with B's original row intact and A's row gone
#[tokio::test]
async fn replace_keeps_shared_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let a = factory::create_platform(db).await?;
    let b = factory::create_platform(db).await?;
    let c = factory::create_platform(db).await?;
    let on_a = factory::SaleFactory::new(db)
        .game(game.id)
        .platform(a.id)
        .amount(111)
        .build()
        .await?;
    let on_b = factory::SaleFactory::new(db)
        .game(game.id)
        .platform(b.id)
        .amount(777)
        .build()
        .await?;

    let diff = sale_links()
        .replace(db, game.id, &BTreeSet::from([b.id, c.id]))
        .await?;

    assert_eq!(diff.additions, vec![c.id]);
    assert_eq!(diff.removals, vec![a.id]);

    let kept = entity::prelude::Sale::find_by_id(on_b.id).one(db).await?.unwrap();
    assert_eq!(kept.platform_id, b.id);
    assert_eq!(kept.amount, 777);
    assert!(entity::prelude::Sale::find_by_id(on_a.id).one(db).await?.is_none());

    Ok(())
}

/// Tests replacing a set with itself.
///
/// Expected: Ok(RelationDiff) that is empty
#[tokio::test]
async fn replace_with_same_set_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let genre = factory::create_genre(db).await?;
    factory::link_game_genre(db, game.id, genre.id).await?;

    let diff = genre_links()
        .replace(db, game.id, &BTreeSet::from([genre.id]))
        .await?;

    assert!(diff.is_empty());

    Ok(())
}
