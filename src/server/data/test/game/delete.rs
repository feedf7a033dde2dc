use super::*;

/// Tests that deleting a game removes its links and sales but keeps the linked platforms.
///
/// Expected: Ok(true), no junction rows or sales left, platform still present
#[tokio::test]
async fn removes_links_and_sales() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let platform = factory::create_platform(db).await?;
    let genre = factory::create_genre(db).await?;
    factory::link_game_platform(db, game.id, platform.id).await?;
    factory::link_game_genre(db, game.id, genre.id).await?;
    factory::SaleFactory::new(db)
        .game(game.id)
        .platform(platform.id)
        .build()
        .await?;

    let deleted = GameRepository::new(db).delete(game.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::GamePlatform::find().count(db).await?, 0);
    assert_eq!(entity::prelude::GameGenre::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Sale::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Platform::find().count(db).await?, 1);

    Ok(())
}
