use super::*;

/// Tests creating a company with a creator.
///
/// Verifies that the creator reference is hydrated on the returned model.
///
/// Expected: Ok(Company) with `created_by_user` set to the creator
#[tokio::test]
async fn creates_company_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::UserFactory::new(db).username("gabe").build().await?;

    let company = CompanyRepository::new(db)
        .create(CreateCompanyParams {
            title: "Valve".to_string(),
            founded_at: NaiveDate::from_ymd_opt(1996, 8, 24).unwrap(),
            created_by_user_id: Some(user.id),
        })
        .await?;

    assert_eq!(company.title, "Valve");
    let creator = company.created_by_user.unwrap();
    assert_eq!(creator.id, user.id);
    assert_eq!(creator.username, "gabe");

    Ok(())
}
