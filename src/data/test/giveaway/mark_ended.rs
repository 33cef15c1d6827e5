use super::*;

/// Tests closing an open giveaway.
///
/// Verifies that `ended` flips and the winner list round-trips through storage.
///
/// Expected: Ok(true) and the stored winners in draw order
#[tokio::test]
async fn closes_open_giveaway_with_winners() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    let transitioned = repo.mark_ended(giveaway.id, &[22, 11]).await?;

    assert!(transitioned);
    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert!(stored.ended);
    assert_eq!(stored.winners, Some(vec![22, 11]));

    Ok(())
}

/// Tests that only the first close wins.
///
/// Verifies that a second call neither reports a transition nor overwrites winners.
///
/// Expected: Ok(false) and the original winners kept
#[tokio::test]
async fn second_close_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.mark_ended(giveaway.id, &[1]).await?);
    assert!(!repo.mark_ended(giveaway.id, &[2]).await?);

    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(stored.winners, Some(vec![1]));

    Ok(())
}

/// Tests closing with nobody drawn.
///
/// Expected: Ok(true) and an empty stored list
#[tokio::test]
async fn records_empty_winner_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.mark_ended(giveaway.id, &[]).await?);

    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(stored.winners, Some(vec![]));

    Ok(())
}

/// Tests closing a giveaway that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_giveaway_is_not_closed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    assert!(!repo.mark_ended(404, &[1]).await?);

    Ok(())
}

/// Tests closing with drawn winners after an override was stored.
///
/// Verifies that the drawn close refuses and the override can still close it.
///
/// Expected: Ok(false) from `mark_drawn`, then Ok(true) with the forced winner
#[tokio::test]
async fn drawn_close_yields_to_override() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let giveaway = factory::create_giveaway(db).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.set_forced_winner(giveaway.id, 8).await?);
    assert!(!repo.mark_drawn(giveaway.id, &[1, 2]).await?);

    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert!(!stored.ended);

    assert!(repo.mark_ended(giveaway.id, &[8]).await?);
    let stored = repo.find_by_id(giveaway.id).await?.unwrap();
    assert_eq!(stored.winners, Some(vec![8]));

    Ok(())
}
