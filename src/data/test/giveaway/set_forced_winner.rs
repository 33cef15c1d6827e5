use super::*;

/// Tests storing an override on an open giveaway.
///
/// Expected: Ok(true) and the override persisted
#[tokio::test]
async fn sets_override_on_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.set_forced_winner(giveaway.id, 77).await?);

    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(stored.forced_winner, Some(77));

    Ok(())
}

/// Tests that a resolved giveaway cannot be overridden.
///
/// Expected: Ok(false) and no override stored
#[tokio::test]
async fn rejects_ended_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = GiveawayFactory::new(db).resolved_with(&[5]).build().await?;

    let repo = GiveawayRepository::new(db);
    assert!(!repo.set_forced_winner(giveaway.id, 77).await?);

    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert!(stored.forced_winner.is_none());

    Ok(())
}
