use super::*;

/// Tests overriding by announcement message id.
///
/// Expected: Ok(giveaway) and the override stored
#[tokio::test]
async fn sets_override_by_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = MockPlatform::with_reactors(Vec::new());

    let giveaway = GiveawayFactory::new(db)
        .guild_id(10)
        .message_id(4_242)
        .build()
        .await?;

    let service = GiveawayService::new(db, &platform, TIMEOUT);
    let found = service.force_winner_by_message(10, 4_242, 8).await?;

    assert_eq!(found.id, giveaway.id);
    let stored = GiveawayRepository::new(db)
        .find_by_id(giveaway.id)
        .await?
        .unwrap();
    assert_eq!(stored.forced_winner, Some(8));

    Ok(())
}

/// Tests overriding a resolved or unknown giveaway.
///
/// Expected: Err(GiveawayNotFound) in both cases
#[tokio::test]
async fn rejects_resolved_and_unknown_giveaways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let platform = MockPlatform::with_reactors(Vec::new());

    let resolved = GiveawayFactory::new(db)
        .guild_id(10)
        .message_id(1)
        .resolved_with(&[3])
        .build()
        .await?;

    let service = GiveawayService::new(db, &platform, TIMEOUT);

    assert!(matches!(
        service.force_winner(resolved.id, 8).await,
        Err(AppError::GiveawayErr(GiveawayError::GiveawayNotFound))
    ));
    assert!(matches!(
        service.force_winner_by_message(10, 1, 8).await,
        Err(AppError::GiveawayErr(GiveawayError::GiveawayNotFound))
    ));
    assert!(matches!(
        service.force_winner(404, 8).await,
        Err(AppError::GiveawayErr(GiveawayError::GiveawayNotFound))
    ));

    Ok(())
}
