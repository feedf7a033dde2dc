use super::*;

/// Tests creating a game with platforms and genres.
///
/// Verifies that junction rows are written and that the returned game carries its company
/// and its relations sorted by id.
///
/// Expected: Ok(Game) with both platforms and the genre attached
#[tokio::test]
async fn attaches_platforms_and_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::CompanyFactory::new(db).title("Valve").build().await?;
    let pc = factory::PlatformFactory::new(db).title("PC").build().await?;
    let deck = factory::PlatformFactory::new(db).title("Steam Deck").build().await?;
    let puzzle = factory::GenreFactory::new(db).title("Puzzle").build().await?;

    let game = GameRepository::new(db)
        .create(CreateGameParams {
            title: "Portal".to_string(),
            released_at: NaiveDate::from_ymd_opt(2007, 10, 10).unwrap(),
            created_by_company_id: company.id,
            created_by_user_id: None,
            platform_ids: BTreeSet::from([deck.id, pc.id]),
            genre_ids: BTreeSet::from([puzzle.id]),
        })
        .await?;

    assert_eq!(game.title, "Portal");
    assert_eq!(game.created_by_company.id, company.id);
    assert_eq!(game.created_by_company.title, "Valve");
    assert!(game.created_by_user.is_none());

    let platform_ids: Vec<i32> = game.platforms.iter().map(|p| p.id).collect();
    assert_eq!(platform_ids, vec![pc.id, deck.id]);
    let genre_titles: Vec<&str> = game.genres.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(genre_titles, vec!["Puzzle"]);

    let links = entity::prelude::GamePlatform::find()
        .filter(entity::game_platform::Column::GameId.eq(game.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);

    Ok(())
}

/// Tests creating a game without any platforms or genres.
///
/// Expected: Ok(Game) with empty relation lists
#[tokio::test]
async fn creates_game_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;

    let game = GameRepository::new(db)
        .create(CreateGameParams {
            title: "Tetris".to_string(),
            released_at: NaiveDate::from_ymd_opt(1984, 6, 6).unwrap(),
            created_by_company_id: company.id,
            created_by_user_id: None,
            platform_ids: BTreeSet::new(),
            genre_ids: BTreeSet::new(),
        })
        .await?;

    assert!(game.platforms.is_empty());
    assert!(game.genres.is_empty());

    Ok(())
}
