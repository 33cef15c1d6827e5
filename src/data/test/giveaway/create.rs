use super::*;

/// Tests persisting a new giveaway.
///
/// Verifies that the record starts open with no override and no winners.
///
/// Expected: Ok(giveaway) matching the parameters
#[tokio::test]
async fn creates_open_giveaway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let giveaway = repo
        .create(CreateGiveawayParam {
            guild_id: 10,
            channel_id: 20,
            message_id: 30,
            host_id: 40,
            prize: "Discord Nitro".to_string(),
            winners_count: 2,
            end_time: 1_700_000_000_000,
        })
        .await?;

    assert_eq!(giveaway.guild_id, 10);
    assert_eq!(giveaway.message_id, 30);
    assert_eq!(giveaway.prize, "Discord Nitro");
    assert_eq!(giveaway.winners_count, 2);
    assert_eq!(giveaway.end_time, 1_700_000_000_000);
    assert!(!giveaway.ended);
    assert!(giveaway.forced_winner.is_none());
    assert!(giveaway.winners.is_none());

    let stored = repo.find_by_id(giveaway.id).await?;
    assert_eq!(stored, Some(giveaway));

    Ok(())
}

/// Tests a winner count that does not fit the stored column.
///
/// Expected: Err(InvalidWinnerCount) and nothing persisted
#[tokio::test]
async fn rejects_oversized_winner_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    let result = repo
        .create(CreateGiveawayParam {
            guild_id: 10,
            channel_id: 20,
            message_id: 30,
            host_id: 40,
            prize: "Discord Nitro".to_string(),
            winners_count: i32::MAX as u32 + 1,
            end_time: 1_700_000_000_000,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::GiveawayErr(GiveawayError::InvalidWinnerCount))
    ));
    assert!(repo.list_open().await?.is_empty());

    Ok(())
}
