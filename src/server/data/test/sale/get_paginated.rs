use super::*;

/// Tests filtering sales by game title and amount range together.
///
/// Expected: Ok(Page) with only the sales of the matching game inside the range
#[tokio::test]
async fn filters_by_game_and_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let doom = factory::GameFactory::new(db).title("Doom").build().await?;
    let quake = factory::GameFactory::new(db).title("Quake").build().await?;
    let pc = factory::create_platform(db).await?;
    let console = factory::create_platform(db).await?;
    let small = factory::SaleFactory::new(db)
        .game(doom.id)
        .platform(pc.id)
        .amount(100)
        .build()
        .await?;
    factory::SaleFactory::new(db)
        .game(doom.id)
        .platform(console.id)
        .amount(5_000)
        .build()
        .await?;
    factory::SaleFactory::new(db)
        .game(quake.id)
        .platform(pc.id)
        .amount(200)
        .build()
        .await?;

    let request = ListRequest {
        filters: SaleFilter {
            game: Some("doo".to_string()),
            max_amount: Some(1_000),
            ..Default::default()
        }
        .into_predicates(),
        ..Default::default()
    };
    let page = SaleRepository::new(db)
        .get_paginated(catalog.sales(), &request)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, small.id);
    assert_eq!(page.items[0].game.title, "Doom");

    Ok(())
}

/// Tests ordering sales by amount, descending.
///
/// Expected: Ok(Page) with the largest sale first
#[tokio::test]
async fn orders_by_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let low = factory::SaleFactory::new(db).amount(1).build().await?;
    let high = factory::SaleFactory::new(db).amount(3).build().await?;
    let mid = factory::SaleFactory::new(db).amount(2).build().await?;

    let request = ListRequest {
        orders: vec![OrderDirective::desc(SaleOrderColumn::Amount)],
        ..Default::default()
    };
    let page = SaleRepository::new(db)
        .get_paginated(catalog.sales(), &request)
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![high.id, mid.id, low.id]);

    Ok(())
}
