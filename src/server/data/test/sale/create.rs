use super::*;

/// Tests recording a sale.
///
/// Verifies that game and platform references are hydrated with their titles.
///
/// Expected: Ok(Sale) with the amount and both references
#[tokio::test]
async fn creates_sale_with_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::GameFactory::new(db).title("Half-Life").build().await?;
    let platform = factory::PlatformFactory::new(db).title("PC").build().await?;
    let user = factory::create_user(db).await?;

    let sale = SaleRepository::new(db)
        .create(CreateSaleParams {
            amount: 9_300_000,
            game_id: game.id,
            platform_id: platform.id,
            created_by_user_id: Some(user.id),
        })
        .await?;

    assert_eq!(sale.amount, 9_300_000);
    assert_eq!(sale.game.title, "Half-Life");
    assert_eq!(sale.platform.title, "PC");
    assert_eq!(sale.created_by_user.map(|u| u.id), Some(user.id));

    Ok(())
}
