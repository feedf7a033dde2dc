use super::*;

/// Tests changing the amount of a sale.
///
/// Expected: Ok(Some(Sale)) with the new amount and unchanged references
#[tokio::test]
async fn updates_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::SaleFactory::new(db).amount(5).build().await?;

    let updated = SaleRepository::new(db)
        .update(
            stored.id,
            UpdateSaleParams {
                amount: Some(50),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.amount, 50);
    assert_eq!(updated.game.id, stored.game_id);
    assert_eq!(updated.platform.id, stored.platform_id);

    Ok(())
}
