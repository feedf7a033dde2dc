use super::*;

/// Tests an update that changes nothing.
///
/// Verifies that the stored row is returned unchanged.
///
/// Expected: Ok(Some(Company)) equal to the company before the update
#[tokio::test]
async fn empty_update_returns_existing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_company(db).await?;
    let repo = CompanyRepository::new(db);
    let before = repo.get_by_id(stored.id).await?.unwrap();

    let after = repo
        .update(stored.id, UpdateCompanyParams::default())
        .await?
        .unwrap();

    assert_eq!(before, after);

    Ok(())
}

/// Tests renaming a company.
///
/// Expected: Ok(Some(Company)) with the new title and the old founding date
#[tokio::test]
async fn renames_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::CompanyFactory::new(db)
        .founded_at(NaiveDate::from_ymd_opt(1889, 9, 23).unwrap())
        .build()
        .await?;

    let updated = CompanyRepository::new(db)
        .update(
            stored.id,
            UpdateCompanyParams {
                title: Some("Nintendo".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Nintendo");
    assert_eq!(updated.founded_at, stored.founded_at);

    Ok(())
}
