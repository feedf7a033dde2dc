use super::*;

/// Tests ordering users by the number of games they created.
///
/// Expected: Ok(Page) with the most prolific creator first and the total of all users
#[tokio::test]
async fn orders_by_created_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let idle = factory::create_user(db).await?;
    let busy = factory::create_user(db).await?;
    for _ in 0..2 {
        factory::GameFactory::new(db)
            .created_by_user(busy.id)
            .build()
            .await?;
    }

    let request = ListRequest {
        orders: vec![OrderDirective::desc(UserOrderColumn::CreatedGames)],
        ..Default::default()
    };
    let page = UserRepository::new(db)
        .get_paginated(catalog.users(), &request)
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![busy.id, idle.id]);
    assert_eq!(page.total, 2);

    Ok(())
}
