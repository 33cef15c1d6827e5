use super::*;

/// Tests that each cooldown kind writes its own column.
///
/// Expected: Ok with only the targeted stamp changed
#[tokio::test]
async fn stamps_only_requested_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 0).await?;

    let repo = AccountRepository::new(db);
    repo.set_cooldown(1, 10, CooldownKind::Work, 1_700_000_000_000)
        .await?;

    let account = repo.find(1, 10).await?.unwrap();
    assert_eq!(account.last_work, 1_700_000_000_000);
    assert_eq!(account.last_daily, 0);
    assert_eq!(account.last_crime, 0);

    repo.set_cooldown(1, 10, CooldownKind::Crime, 42).await?;
    repo.set_cooldown(1, 10, CooldownKind::Daily, 7).await?;

    let account = repo.find(1, 10).await?.unwrap();
    assert_eq!(account.last_crime, 42);
    assert_eq!(account.last_daily, 7);

    Ok(())
}
