//! Cooldown-gated income: daily claim, work and crime.

use rand::Rng;
use sea_orm::TransactionTrait;

use crate::{
    data::account::AccountRepository,
    error::AppError,
    game::{
        crime::{self, CrimeDraw},
        work::WorkDraw,
    },
    model::account::{BalanceField, CooldownKind},
};

use super::{ensure_ready, reload, EconomyService, Earning, DAILY_REWARD};

impl<'a> EconomyService<'a> {
    /// Claims the fixed daily reward.
    ///
    /// # Arguments
    /// - `user_id` / `guild_id` - Account key
    /// - `now_ms` - Current time in epoch milliseconds
    ///
    /// # Returns
    /// - `Ok(Earning)` - Reward credited and cooldown stamped
    /// - `Err(AppError::EconomyErr(CooldownActive))` - Claimed less than 24h ago
    pub async fn claim_daily(
        &self,
        user_id: u64,
        guild_id: u64,
        now_ms: i64,
    ) -> Result<Earning, AppError> {
        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let account = repo.get_or_create(user_id, guild_id).await?;
        ensure_ready(&account, CooldownKind::Daily, now_ms)?;

        repo.adjust(user_id, guild_id, BalanceField::Balance, DAILY_REWARD)
            .await?;
        repo.set_cooldown(user_id, guild_id, CooldownKind::Daily, now_ms)
            .await?;

        let account = reload(&repo, user_id, guild_id).await?;
        txn.commit().await?;

        Ok(Earning {
            amount: DAILY_REWARD,
            job: None,
            account,
        })
    }

    /// Works a random job for a random reward.
    ///
    /// # Returns
    /// - `Ok(Earning)` - Reward credited, job title set, cooldown stamped
    /// - `Err(AppError::EconomyErr(CooldownActive))` - Worked less than 1h ago
    pub async fn work<R: Rng + ?Sized>(
        &self,
        user_id: u64,
        guild_id: u64,
        now_ms: i64,
        rng: &mut R,
    ) -> Result<Earning, AppError> {
        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let account = repo.get_or_create(user_id, guild_id).await?;
        ensure_ready(&account, CooldownKind::Work, now_ms)?;

        let draw = WorkDraw::roll(rng);

        repo.adjust(user_id, guild_id, BalanceField::Balance, draw.reward)
            .await?;
        repo.set_cooldown(user_id, guild_id, CooldownKind::Work, now_ms)
            .await?;

        let account = reload(&repo, user_id, guild_id).await?;
        txn.commit().await?;

        Ok(Earning {
            amount: draw.reward,
            job: Some(draw.job),
            account,
        })
    }

    /// Attempts a crime with a random draw.
    pub async fn crime<R: Rng + ?Sized>(
        &self,
        user_id: u64,
        guild_id: u64,
        now_ms: i64,
        rng: &mut R,
    ) -> Result<Earning, AppError> {
        let draw = CrimeDraw::roll(rng);
        self.crime_with_draw(user_id, guild_id, now_ms, draw).await
    }

    /// Settles a crime against a known draw.
    ///
    /// The cooldown is stamped whether the crime succeeds or not. A fine larger than
    /// the wallet only takes what the wallet holds.
    ///
    /// # Returns
    /// - `Ok(Earning)` - Signed amount applied (negative when caught)
    /// - `Err(AppError::EconomyErr(CooldownActive))` - Attempted less than 2h ago
    pub async fn crime_with_draw(
        &self,
        user_id: u64,
        guild_id: u64,
        now_ms: i64,
        draw: CrimeDraw,
    ) -> Result<Earning, AppError> {
        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let account = repo.get_or_create(user_id, guild_id).await?;
        ensure_ready(&account, CooldownKind::Crime, now_ms)?;

        let delta = crime::settle(account.balance, draw);

        if delta != 0 {
            repo.adjust(user_id, guild_id, BalanceField::Balance, delta)
                .await?;
        }
        repo.set_cooldown(user_id, guild_id, CooldownKind::Crime, now_ms)
            .await?;

        let account = reload(&repo, user_id, guild_id).await?;
        txn.commit().await?;

        Ok(Earning {
            amount: delta,
            job: None,
            account,
        })
    }
}
