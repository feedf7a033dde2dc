use super::*;

/// Tests that listed games are fully hydrated.
///
/// Verifies that each game on the page carries only its own platforms even when the page
/// holds several games sharing a platform.
///
/// Expected: Ok(Page) with per-game platform lists
#[tokio::test]
async fn hydrates_relations_per_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let pc = factory::PlatformFactory::new(db).title("PC").build().await?;
    let console = factory::PlatformFactory::new(db).title("Console").build().await?;
    let first = factory::GameFactory::new(db).title("First").build().await?;
    let second = factory::GameFactory::new(db).title("Second").build().await?;
    factory::link_game_platform(db, first.id, pc.id).await?;
    factory::link_game_platform(db, second.id, pc.id).await?;
    factory::link_game_platform(db, second.id, console.id).await?;

    let request = ListRequest {
        orders: vec![OrderDirective::asc(GameOrderColumn::Title)],
        ..Default::default()
    };
    let page = GameRepository::new(db)
        .get_paginated(catalog.games(), &request)
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].id, first.id);
    let first_platforms: Vec<i32> = page.items[0].platforms.iter().map(|p| p.id).collect();
    assert_eq!(first_platforms, vec![pc.id]);
    let second_platforms: Vec<i32> = page.items[1].platforms.iter().map(|p| p.id).collect();
    assert_eq!(second_platforms, vec![pc.id, console.id]);

    Ok(())
}

/// Tests filtering games by company title while sorting by platform count.
///
/// Expected: Ok(Page) with only the company's games, most platforms first
#[tokio::test]
async fn filters_by_company_and_sorts_by_platforms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let nintendo = factory::CompanyFactory::new(db).title("Nintendo").build().await?;
    let sega = factory::CompanyFactory::new(db).title("Sega").build().await?;
    let zelda = factory::GameFactory::new(db).company(nintendo.id).build().await?;
    let mario = factory::GameFactory::new(db).company(nintendo.id).build().await?;
    let sonic = factory::GameFactory::new(db).company(sega.id).build().await?;
    let switch = factory::create_platform(db).await?;
    let wii = factory::create_platform(db).await?;
    factory::link_game_platform(db, mario.id, switch.id).await?;
    factory::link_game_platform(db, mario.id, wii.id).await?;
    factory::link_game_platform(db, sonic.id, switch.id).await?;

    let request = ListRequest {
        filters: GameFilter {
            created_by_company: Some("nin".to_string()),
            ..Default::default()
        }
        .into_predicates(),
        orders: vec![OrderDirective::desc(GameOrderColumn::Platforms)],
        ..Default::default()
    };
    let page = GameRepository::new(db)
        .get_paginated(catalog.games(), &request)
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![mario.id, zelda.id]);
    assert_eq!(page.total, 2);

    Ok(())
}
