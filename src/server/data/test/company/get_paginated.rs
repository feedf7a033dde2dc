use super::*;

/// Tests filtering companies by creator username.
///
/// Verifies that companies without a creator are excluded by the related filter.
///
/// Expected: Ok(Page) with only the matching creator's companies
#[tokio::test]
async fn filters_by_creator_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let alice = factory::UserFactory::new(db).username("alice").build().await?;
    let bob = factory::UserFactory::new(db).username("bob").build().await?;
    let matched = factory::CompanyFactory::new(db)
        .created_by_user(alice.id)
        .build()
        .await?;
    factory::CompanyFactory::new(db)
        .created_by_user(bob.id)
        .build()
        .await?;
    factory::create_company(db).await?;

    let request = ListRequest {
        filters: CompanyFilter {
            created_by_user: Some("ALI".to_string()),
            ..Default::default()
        }
        .into_predicates(),
        ..Default::default()
    };
    let page = CompanyRepository::new(db)
        .get_paginated(catalog.companies(), &request)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, matched.id);

    Ok(())
}

/// Tests ordering companies by game count, descending.
///
/// Expected: Ok(Page) with the company owning most games first
#[tokio::test]
async fn orders_by_game_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build().unwrap();

    let small = factory::create_company(db).await?;
    let large = factory::create_company(db).await?;
    let empty = factory::create_company(db).await?;
    factory::GameFactory::new(db).company(small.id).build().await?;
    for _ in 0..3 {
        factory::GameFactory::new(db).company(large.id).build().await?;
    }

    let request = ListRequest {
        orders: vec![OrderDirective::desc(CompanyOrderColumn::Games)],
        ..Default::default()
    };
    let page = CompanyRepository::new(db)
        .get_paginated(catalog.companies(), &request)
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![large.id, small.id, empty.id]);

    Ok(())
}
