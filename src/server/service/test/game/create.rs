use super::*;

fn params(company_id: i32, platform_ids: &[i32], genre_ids: &[i32]) -> CreateGameParams {
    CreateGameParams {
        title: "Half-Life 2".to_string(),
        released_at: NaiveDate::from_ymd_opt(2004, 11, 16).unwrap(),
        created_by_company_id: company_id,
        created_by_user_id: None,
        platform_ids: platform_ids.iter().copied().collect(),
        genre_ids: genre_ids.iter().copied().collect(),
    }
}

/// Tests creating a game that references genres which do not exist.
///
/// Verifies that every missing id is reported and nothing is written.
///
/// Expected: Err(RelationNotFound) listing both missing genre ids, no game stored
#[tokio::test]
async fn reports_all_missing_genres() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let company = factory::create_company(db).await?;
    let genre = factory::create_genre(db).await?;

    let result = GameService::new(db, &catalog)
        .create(params(company.id, &[], &[genre.id, 900, 901]))
        .await;

    match result {
        Err(AppError::QueryErr(QueryError::RelationNotFound { entity: name, ids })) => {
            assert_eq!(name, "genre");
            assert_eq!(ids, vec![900, 901]);
        }
        other => panic!("Expected RelationNotFound, got {:?}", other),
    }
    assert_eq!(entity::prelude::Game::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a game for a company that does not exist.
///
/// Expected: Err(RelationNotFound) naming the company
#[tokio::test]
async fn rejects_missing_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let result = GameService::new(db, &catalog)
        .create(params(55, &[], &[]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::QueryErr(QueryError::RelationNotFound { entity: "company", .. }))
    ));

    Ok(())
}

/// Tests that a taken title is reported as a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn duplicate_title_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let company = factory::create_company(db).await?;
    let service = GameService::new(db, &catalog);
    service.create(params(company.id, &[], &[])).await?;

    let result = service.create(params(company.id, &[], &[])).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
