use super::*;

/// Tests lazily creating an account on first use.
///
/// Verifies that an unknown (user, guild) pair yields a zeroed account.
///
/// Expected: Ok(account) with every field zero
#[tokio::test]
async fn creates_zeroed_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo.get_or_create(1, 10).await?;

    assert_eq!(account.user_id, 1);
    assert_eq!(account.guild_id, 10);
    assert_eq!(account.balance, 0);
    assert_eq!(account.bank, 0);
    assert_eq!(account.last_daily, 0);
    assert_eq!(account.last_work, 0);
    assert_eq!(account.last_crime, 0);

    Ok(())
}

/// Tests that an existing account is returned untouched.
///
/// Expected: Ok(account) with the stored balance
#[tokio::test]
async fn returns_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 750).await?;

    let repo = AccountRepository::new(db);
    let first = repo.get_or_create(1, 10).await?;
    let second = repo.get_or_create(1, 10).await?;

    assert_eq!(first.balance, 750);
    assert_eq!(first, second);

    Ok(())
}

/// Tests that guilds are independent namespaces.
///
/// Verifies that the same user gets a separate account in each guild.
///
/// Expected: Ok with distinct balances per guild
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 500).await?;

    let repo = AccountRepository::new(db);
    let other_guild = repo.get_or_create(1, 20).await?;

    assert_eq!(other_guild.balance, 0);
    assert_eq!(repo.find(1, 10).await?.unwrap().balance, 500);

    Ok(())
}
