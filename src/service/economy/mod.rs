//! Economy service for the per-guild ledger.
//!
//! Every operation follows the same shape: open one database transaction, read the
//! account(s) involved, validate and gate, roll the outcome, apply the mutations, then
//! commit. Any early return drops the transaction, so a rejected action leaves no trace
//! and a successful one applies all of its balance changes together.
//!
//! The service is organized into separate modules by concern:
//! - `earning` - Daily, work and crime (cooldown-gated income)
//! - `banking` - Balance, deposit, withdraw, pay, admin grants and the leaderboard
//! - `wager` - Wager games and robbery

pub mod banking;
pub mod earning;
pub mod wager;

#[cfg(test)]
mod test;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    data::account::AccountRepository,
    error::{economy::EconomyError, AppError},
    game::{rob::RobOutcome, Draw, Outcome},
    model::account::{Account, CooldownKind},
    util::cooldown,
};

/// Reward for the daily claim.
pub const DAILY_REWARD: i64 = 1000;

/// Service providing ledger operations for the economy commands.
pub struct EconomyService<'a> {
    db: &'a DatabaseConnection,
}

/// Result of a fixed or randomized payout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Earning {
    /// Signed change applied to the wallet.
    pub amount: i64,
    /// Job title for `work`, none for other actions.
    pub job: Option<&'static str>,
    pub account: Account,
}

/// Result of moving funds between wallet and bank or between users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub amount: i64,
    /// Account of the user who ran the command, after the transfer.
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WagerReceipt {
    pub draw: Draw,
    pub outcome: Outcome,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobReceipt {
    pub outcome: RobOutcome,
    pub robber: Account,
    pub target: Account,
}

impl<'a> EconomyService<'a> {
    /// Creates a new EconomyService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Fails with `CooldownActive` when `kind` was used less than its window ago.
fn ensure_ready(account: &Account, kind: CooldownKind, now_ms: i64) -> Result<(), EconomyError> {
    match cooldown::remaining(account.last_action(kind), kind.window(), now_ms) {
        Some(remaining) => Err(EconomyError::CooldownActive { remaining }),
        None => Ok(()),
    }
}

/// Fails with `InsufficientFunds` when `requested` exceeds `available`.
fn ensure_funds(requested: i64, available: i64) -> Result<(), EconomyError> {
    if requested > available {
        return Err(EconomyError::InsufficientFunds {
            requested,
            available,
        });
    }

    Ok(())
}

/// Re-reads an account after mutation within the same transaction.
async fn reload<C: ConnectionTrait>(
    repo: &AccountRepository<'_, C>,
    user_id: u64,
    guild_id: u64,
) -> Result<Account, AppError> {
    Ok(repo.get_or_create(user_id, guild_id).await?)
}
