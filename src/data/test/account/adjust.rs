use super::*;

/// Tests adding and subtracting from the wallet.
///
/// Expected: Ok with the balance reflecting both deltas
#[tokio::test]
async fn applies_positive_and_negative_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 1_000).await?;

    let repo = AccountRepository::new(db);
    repo.adjust(1, 10, BalanceField::Balance, 250).await?;
    repo.adjust(1, 10, BalanceField::Balance, -400).await?;

    let account = repo.find(1, 10).await?.unwrap();
    assert_eq!(account.balance, 850);
    assert_eq!(account.bank, 0);

    Ok(())
}

/// Tests that the bank column is adjusted independently of the wallet.
///
/// Expected: Ok with only the bank changed
#[tokio::test]
async fn adjusts_bank_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 300).await?;

    let repo = AccountRepository::new(db);
    repo.adjust(1, 10, BalanceField::Bank, 120).await?;

    let account = repo.find(1, 10).await?.unwrap();
    assert_eq!(account.balance, 300);
    assert_eq!(account.bank, 120);

    Ok(())
}

/// Tests adjusting an account that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let result = repo.adjust(99, 10, BalanceField::Balance, 5).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}

/// Tests many adjustments to one account running at once.
///
/// Verifies that each increment is applied in SQL against the stored value, so no
/// concurrent update is lost.
///
/// Expected: Ok with the exact sum of every delta
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adjustments_are_not_lost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_economy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db, 1, 10, 0).await?;

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move {
                AccountRepository::new(&db)
                    .adjust(1, 10, BalanceField::Balance, 10)
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap()?;
    }

    let account = AccountRepository::new(db).find(1, 10).await?.unwrap();
    assert_eq!(account.balance, 200);

    Ok(())
}
