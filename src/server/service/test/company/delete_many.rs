use super::*;

/// Tests bulk deletion with some ids missing.
///
/// Verifies that the whole request is rejected and no company is removed.
///
/// Expected: Err(RelationNotFound) with the missing id, all companies kept
#[tokio::test]
async fn missing_id_deletes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let first = factory::create_company(db).await?;
    let second = factory::create_company(db).await?;

    let result = CompanyService::new(db, &catalog)
        .delete_many(&[first.id, second.id, 77])
        .await;

    match result {
        Err(AppError::QueryErr(QueryError::RelationNotFound { ids, .. })) => {
            assert_eq!(ids, vec![77]);
        }
        other => panic!("Expected RelationNotFound, got {:?}", other),
    }
    assert_eq!(entity::prelude::Company::find().count(db).await?, 2);

    Ok(())
}

/// Tests bulk deletion with duplicate ids.
///
/// Expected: Ok(2)
#[tokio::test]
async fn duplicates_are_collapsed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let first = factory::create_company(db).await?;
    let second = factory::create_company(db).await?;

    let deleted = CompanyService::new(db, &catalog)
        .delete_many(&[first.id, second.id, first.id])
        .await?;

    assert_eq!(deleted, 2);

    Ok(())
}
