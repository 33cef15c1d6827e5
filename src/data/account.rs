//! Account data repository for ledger operations
//!
//! Provides the `AccountRepository`. Every mutation is a single SQL statement so the
//! read-modify-write of a balance never happens in application memory. The repository
//! is generic over the connection so services can run several calls inside one
//! `DatabaseTransaction`.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::account::{Account, BalanceField, CooldownKind};

/// Repository providing database operations for the account ledger.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the account for a user in a guild, creating a zeroed one if needed.
    ///
    /// Uses `INSERT ... ON CONFLICT DO NOTHING` followed by a read, so concurrent first
    /// calls for the same key never fail or create duplicates.
    ///
    /// # Returns
    /// - `Ok(Account)` - Existing or freshly created account
    /// - `Err(DbErr)` - Database error
    pub async fn get_or_create(&self, user_id: u64, guild_id: u64) -> Result<Account, DbErr> {
        entity::prelude::Account::insert(entity::account::ActiveModel {
            user_id: ActiveValue::Set(user_id as i64),
            guild_id: ActiveValue::Set(guild_id as i64),
            balance: ActiveValue::Set(0),
            bank: ActiveValue::Set(0),
            last_daily: ActiveValue::Set(0),
            last_work: ActiveValue::Set(0),
            last_crime: ActiveValue::Set(0),
        })
        .on_conflict_do_nothing_on([
            entity::account::Column::UserId,
            entity::account::Column::GuildId,
        ])
        .exec_without_returning(self.db)
        .await?;

        self.find(user_id, guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("account {}/{}", user_id, guild_id)))
    }

    /// Finds an account without creating it.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The account exists
    /// - `Ok(None)` - The user never interacted with the economy in this guild
    /// - `Err(DbErr)` - Database error
    pub async fn find(&self, user_id: u64, guild_id: u64) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id((user_id as i64, guild_id as i64))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Adds `delta` (possibly negative) to the wallet or bank of an existing account.
    ///
    /// Executes `UPDATE account SET field = field + delta`. The repository never rejects a
    /// delta; callers clamp losses so balances stay non-negative.
    ///
    /// # Returns
    /// - `Ok(())` - Row updated
    /// - `Err(DbErr::RecordNotUpdated)` - No such account
    /// - `Err(DbErr)` - Database error
    pub async fn adjust(
        &self,
        user_id: u64,
        guild_id: u64,
        field: BalanceField,
        delta: i64,
    ) -> Result<(), DbErr> {
        let column = field.column();

        let result = entity::prelude::Account::update_many()
            .col_expr(column, Expr::col(column).add(delta))
            .filter(entity::account::Column::UserId.eq(user_id as i64))
            .filter(entity::account::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Stamps the cooldown of `kind` with `timestamp` (epoch milliseconds).
    pub async fn set_cooldown(
        &self,
        user_id: u64,
        guild_id: u64,
        kind: CooldownKind,
        timestamp: i64,
    ) -> Result<(), DbErr> {
        let result = entity::prelude::Account::update_many()
            .col_expr(kind.column(), Expr::value(timestamp))
            .filter(entity::account::Column::UserId.eq(user_id as i64))
            .filter(entity::account::Column::GuildId.eq(guild_id as i64))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }

    /// Richest accounts of a guild by wallet plus bank, descending.
    ///
    /// Ordering and the limit run in SQL. Ties keep a stable order by user id.
    pub async fn top_by_total(&self, guild_id: u64, limit: usize) -> Result<Vec<Account>, DbErr> {
        let total = Expr::col(entity::account::Column::Balance)
            .add(Expr::col(entity::account::Column::Bank));

        let entities = entity::prelude::Account::find()
            .filter(entity::account::Column::GuildId.eq(guild_id as i64))
            .order_by_desc(total)
            .order_by_asc(entity::account::Column::UserId)
            .limit(limit as u64)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }
}
