use super::*;

/// Tests replacing a game's genres.
///
/// Verifies that the link shared by the old and new sets survives while the others are
/// swapped.
///
/// Expected: Ok(Some(Game)) with genres {B, C}
#[tokio::test]
async fn replaces_genre_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let a = factory::GenreFactory::new(db).title("A").build().await?;
    let b = factory::GenreFactory::new(db).title("B").build().await?;
    let c = factory::GenreFactory::new(db).title("C").build().await?;
    factory::link_game_genre(db, game.id, a.id).await?;
    factory::link_game_genre(db, game.id, b.id).await?;

    let updated = GameRepository::new(db)
        .update(
            game.id,
            UpdateGameParams {
                genre_ids: Some(BTreeSet::from([b.id, c.id])),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    let titles: Vec<&str> = updated.genres.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);

    let rows = entity::prelude::GameGenre::find()
        .filter(entity::game_genre::Column::GameId.eq(game.id))
        .all(db)
        .await?;
    let linked: BTreeSet<i32> = rows.iter().map(|row| row.genre_id).collect();
    assert_eq!(linked, BTreeSet::from([b.id, c.id]));

    Ok(())
}

/// Tests that omitted relation sets are left untouched.
///
/// Expected: Ok(Some(Game)) with the new title and the original platform
#[tokio::test]
async fn keeps_links_when_not_given() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let platform = factory::create_platform(db).await?;
    factory::link_game_platform(db, game.id, platform.id).await?;

    let updated = GameRepository::new(db)
        .update(
            game.id,
            UpdateGameParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.platforms.len(), 1);
    assert_eq!(updated.platforms[0].id, platform.id);

    Ok(())
}

/// Tests clearing every platform with an empty set.
///
/// Expected: Ok(Some(Game)) with no platforms
#[tokio::test]
async fn empty_set_clears_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let platform = factory::create_platform(db).await?;
    factory::link_game_platform(db, game.id, platform.id).await?;

    let updated = GameRepository::new(db)
        .update(
            game.id,
            UpdateGameParams {
                platform_ids: Some(BTreeSet::new()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.platforms.is_empty());

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db)
        .update(99, UpdateGameParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
