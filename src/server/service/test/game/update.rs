use super::*;

/// Tests that an update naming a missing platform leaves the game untouched.
///
/// Expected: Err(RelationNotFound) and the original title and links kept
#[tokio::test]
async fn missing_platform_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let game = factory::GameFactory::new(db).title("Original").build().await?;
    let platform = factory::create_platform(db).await?;
    factory::link_game_platform(db, game.id, platform.id).await?;
    let service = GameService::new(db, &catalog);

    let result = service
        .update(
            game.id,
            UpdateGameParams {
                title: Some("Changed".to_string()),
                platform_ids: Some(BTreeSet::from([platform.id, 404])),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::QueryErr(QueryError::RelationNotFound { entity: "platform", .. }))
    ));
    let stored = service.get_by_id(game.id).await?;
    assert_eq!(stored.title, "Original");
    assert_eq!(stored.platforms.len(), 1);

    Ok(())
}

/// Tests updating a game that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_game_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::build()?;

    let result = GameService::new(db, &catalog)
        .update(12, UpdateGameParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
