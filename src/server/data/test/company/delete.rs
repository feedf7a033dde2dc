use super::*;

/// Tests that deleting a company removes its games.
///
/// Expected: Ok(true) and no games left for the company
#[tokio::test]
async fn cascades_to_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    factory::GameFactory::new(db).company(company.id).build().await?;
    factory::GameFactory::new(db).company(company.id).build().await?;
    let kept = factory::GameFactory::new(db).company(other.id).build().await?;

    let deleted = CompanyRepository::new(db).delete(company.id).await?;

    assert!(deleted);
    let remaining = entity::prelude::Game::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting a company that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CompanyRepository::new(db).delete(7).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests bulk deletion.
///
/// Expected: Ok(2) and only the unlisted company remains
#[tokio::test]
async fn deletes_many() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_company(db).await?;
    let second = factory::create_company(db).await?;
    factory::create_company(db).await?;

    let deleted = CompanyRepository::new(db)
        .delete_many(&[first.id, second.id])
        .await?;

    assert_eq!(deleted, 2);
    assert_eq!(entity::prelude::Company::find().count(db).await?, 1);

    Ok(())
}
