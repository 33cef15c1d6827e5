use super::*;

/// Tests listing open giveaways for startup reconciliation.
///
/// Verifies that ended giveaways are excluded and results are ordered by end time.
///
/// Expected: Ok(vec) of open giveaways, soonest first
#[tokio::test]
async fn lists_only_open_giveaways_by_end_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = GiveawayFactory::new(db).end_time(3_000).build().await?;
    let sooner = GiveawayFactory::new(db).end_time(1_000).build().await?;
    GiveawayFactory::new(db)
        .end_time(500)
        .resolved_with(&[])
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let open = repo.list_open().await?;

    let ids: Vec<i32> = open.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests listing only overdue open giveaways.
///
/// Expected: Ok(vec) containing giveaways with end_time <= now
#[tokio::test]
async fn lists_due_giveaways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let due = GiveawayFactory::new(db).end_time(1_000).build().await?;
    let boundary = GiveawayFactory::new(db).end_time(2_000).build().await?;
    GiveawayFactory::new(db).end_time(2_001).build().await?;

    let repo = GiveawayRepository::new(db);
    let listed = repo.list_due(2_000).await?;

    let ids: Vec<i32> = listed.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![due.id, boundary.id]);

    Ok(())
}

/// Tests an empty database.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_giveaways() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 0).await?;

    let repo = GiveawayRepository::new(db);
    assert!(repo.list_open().await?.is_empty());

    Ok(())
}
