use super::*;

/// Tests locating an open giveaway by its announcement.
///
/// Expected: Ok(Some(giveaway))
#[tokio::test]
async fn finds_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = GiveawayFactory::new(db)
        .guild_id(10)
        .message_id(555)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let found = repo.find_open_by_message_id(10, 555).await?;

    assert_eq!(found.map(|g| g.id), Some(created.id));

    Ok(())
}

/// Tests that ended giveaways and other guilds are not matched.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn ignores_ended_and_foreign_giveaways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GiveawayFactory::new(db)
        .guild_id(10)
        .message_id(555)
        .resolved_with(&[1])
        .build()
        .await?;
    GiveawayFactory::new(db)
        .guild_id(20)
        .message_id(777)
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);

    assert!(repo.find_open_by_message_id(10, 555).await?.is_none());
    assert!(repo.find_open_by_message_id(10, 777).await?.is_none());

    Ok(())
}
