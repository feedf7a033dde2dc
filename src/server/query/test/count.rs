use super::*;

/// Tests that the count agrees with an unpaginated fetch under a fan-out filter.
///
/// Verifies that filtering games through the platform junction, where one game matches on
/// two platforms, counts and returns that game once.
///
/// Expected: Ok with count 2 and two distinct fetched games
#[tokio::test]
async fn count_matches_fetch_under_fan_out() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let old = factory::create_platform(db).await?;
    let new_a = factory::create_platform(db).await?;
    let new_b = factory::create_platform(db).await?;

    let on_both = factory::create_game(db).await?;
    let on_one = factory::create_game(db).await?;
    let on_old = factory::create_game(db).await?;
    factory::link_game_platform(db, on_both.id, new_a.id).await?;
    factory::link_game_platform(db, on_both.id, new_b.id).await?;
    factory::link_game_platform(db, on_one.id, new_b.id).await?;
    factory::link_game_platform(db, on_old.id, old.id).await?;

    let filters = [FilterPredicate::related(
        "platforms",
        entity::game_platform::Column::PlatformId,
        FilterOp::Gte(new_a.id.into()),
    )];
    let executor = QueryExecutor::new(db, catalog.games());

    let total = executor.count(&filters).await?;
    let games = executor.fetch(&filters, &[], PageRequest::all()).await?;

    let ids: Vec<i32> = games.iter().map(|g| g.id).collect();
    assert_eq!(total, 2);
    assert_eq!(ids, vec![on_both.id, on_one.id]);

    Ok(())
}

/// Tests that the count ignores ordering joins and page bounds.
///
/// Verifies that a page of one row sorted by a to-many column still reports every row.
///
/// Expected: Ok with one item and a total of 3
#[tokio::test]
async fn page_total_ignores_limit_and_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let platform = factory::create_platform(db).await?;
    for _ in 0..3 {
        let game = factory::create_game(db).await?;
        factory::link_game_platform(db, game.id, platform.id).await?;
    }

    let request = ListRequest {
        orders: vec![OrderDirective::desc(GameOrderColumn::Platforms)],
        page: PageRequest::new(None, Some(1)).unwrap(),
        ..Default::default()
    };
    let page = QueryExecutor::new(db, catalog.games()).page(&request).await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 3);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let total = QueryExecutor::new(db, catalog.sales()).count(&[]).await?;

    assert_eq!(total, 0);

    Ok(())
}
