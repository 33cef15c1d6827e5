//! Account factory for creating test ledger rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .user_id(1)
///     .guild_id(10)
///     .balance(2_500)
///     .last_daily(now_ms)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    guild_id: u64,
    balance: i64,
    bank: i64,
    last_daily: i64,
    last_work: i64,
    last_crime: i64,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - user_id / guild_id: unique auto-incremented ids
    /// - balance, bank and every cooldown stamp: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id(),
            guild_id: next_id(),
            balance: 0,
            bank: 0,
            last_daily: 0,
            last_work: 0,
            last_crime: 0,
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn bank(mut self, bank: i64) -> Self {
        self.bank = bank;
        self
    }

    pub fn last_daily(mut self, timestamp: i64) -> Self {
        self.last_daily = timestamp;
        self
    }

    pub fn last_work(mut self, timestamp: i64) -> Self {
        self.last_work = timestamp;
        self
    }

    pub fn last_crime(mut self, timestamp: i64) -> Self {
        self.last_crime = timestamp;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id as i64),
            guild_id: ActiveValue::Set(self.guild_id as i64),
            balance: ActiveValue::Set(self.balance),
            bank: ActiveValue::Set(self.bank),
            last_daily: ActiveValue::Set(self.last_daily),
            last_work: ActiveValue::Set(self.last_work),
            last_crime: ActiveValue::Set(self.last_crime),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account for `user_id` in `guild_id` holding `balance` in the wallet.
///
/// # Example
///
/// ```rust,ignore
/// let account = create_account(&db, 1, 10, 500).await?;
/// ```
pub async fn create_account(
    db: &DatabaseConnection,
    user_id: u64,
    guild_id: u64,
    balance: i64,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db)
        .user_id(user_id)
        .guild_id(guild_id)
        .balance(balance)
        .build()
        .await
}
