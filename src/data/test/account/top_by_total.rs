use super::*;
use test_utils::factory::account::AccountFactory;

/// Tests ranking by wallet plus bank.
///
/// Verifies that bank funds count toward the ranking and other guilds are excluded.
///
/// Expected: Ok(accounts) in descending total order
#[tokio::test]
async fn ranks_by_wallet_plus_bank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).user_id(1).guild_id(10).balance(500).bank(0).build().await?;
    AccountFactory::new(db).user_id(2).guild_id(10).balance(100).bank(900).build().await?;
    AccountFactory::new(db).user_id(3).guild_id(10).balance(700).build().await?;
    AccountFactory::new(db).user_id(4).guild_id(20).balance(9_999).build().await?;

    let repo = AccountRepository::new(db);
    let top = repo.top_by_total(10, 10).await?;

    let order: Vec<u64> = top.iter().map(|a| a.user_id).collect();
    assert_eq!(order, vec![2, 3, 1]);

    Ok(())
}

/// Tests that the limit truncates the ranking.
///
/// Expected: Ok with exactly `limit` accounts
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for user in 1..=5 {
        factory::create_account(db, user, 10, user as i64 * 100).await?;
    }

    let repo = AccountRepository::new(db);
    let top = repo.top_by_total(10, 2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].user_id, 5);
    assert_eq!(top[1].user_id, 4);

    Ok(())
}

/// Tests equal totals split across wallet and bank.
///
/// Verifies that the SQL ordering sums both columns and breaks ties by user id
/// before the limit is applied.
///
/// Expected: Ok with the lower user id first among equal totals
#[tokio::test]
async fn breaks_ties_by_user_id_before_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db).user_id(7).guild_id(10).balance(0).bank(300).build().await?;
    AccountFactory::new(db).user_id(3).guild_id(10).balance(200).bank(100).build().await?;
    AccountFactory::new(db).user_id(5).guild_id(10).balance(300).build().await?;
    AccountFactory::new(db).user_id(1).guild_id(10).balance(50).build().await?;

    let repo = AccountRepository::new(db);
    let top = repo.top_by_total(10, 2).await?;

    let order: Vec<u64> = top.iter().map(|a| a.user_id).collect();
    assert_eq!(order, vec![3, 5]);

    Ok(())
}
