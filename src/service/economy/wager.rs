//! Wager games and robbery, the two randomized actions that can lose money.

use rand::Rng;
use sea_orm::TransactionTrait;

use crate::{
    data::account::AccountRepository,
    error::{economy::EconomyError, AppError},
    game::{
        rob::{self, RobDraw, RobOutcome},
        Bet, Wager,
    },
    model::account::{BalanceField, Member},
};

use super::{ensure_funds, reload, EconomyService, RobReceipt, WagerReceipt};

impl<'a> EconomyService<'a> {
    /// Plays one round of a wager game.
    ///
    /// The stake is checked against the wallet read inside the transaction, and every
    /// game loses at most the stake, so the wallet never goes negative.
    ///
    /// # Returns
    /// - `Ok(WagerReceipt)` - Draw, settled outcome and the updated account
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Stake exceeds the wallet
    pub async fn wager<R: Rng + ?Sized>(
        &self,
        user_id: u64,
        guild_id: u64,
        wager: Wager,
        bet: Bet,
        rng: &mut R,
    ) -> Result<WagerReceipt, AppError> {
        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let account = repo.get_or_create(user_id, guild_id).await?;
        ensure_funds(bet.amount(), account.balance)?;

        let (draw, outcome) = wager.play(bet, rng);

        if outcome.delta != 0 {
            repo.adjust(user_id, guild_id, BalanceField::Balance, outcome.delta)
                .await?;
        }

        let account = reload(&repo, user_id, guild_id).await?;
        txn.commit().await?;

        Ok(WagerReceipt {
            draw,
            outcome,
            account,
        })
    }

    /// Attempts to rob another member with a random draw.
    pub async fn rob<R: Rng + ?Sized>(
        &self,
        guild_id: u64,
        robber_id: u64,
        target: Member,
        rng: &mut R,
    ) -> Result<RobReceipt, AppError> {
        let draw = RobDraw::roll(rng);
        self.rob_with_draw(guild_id, robber_id, target, draw).await
    }

    /// Settles a robbery against a known draw.
    ///
    /// # Returns
    /// - `Ok(RobReceipt)` - Stolen amount or clamped fine, with both accounts
    /// - `Err(AppError::EconomyErr(InvalidTarget))` - Self, bot or a target below the minimum
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Robber holds less than the minimum
    pub async fn rob_with_draw(
        &self,
        guild_id: u64,
        robber_id: u64,
        target: Member,
        draw: RobDraw,
    ) -> Result<RobReceipt, AppError> {
        if target.user_id == robber_id {
            return Err(EconomyError::InvalidTarget("You can't rob yourself!".to_string()).into());
        }
        if target.bot {
            return Err(EconomyError::InvalidTarget("You can't rob a bot!".to_string()).into());
        }

        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let robber = repo.get_or_create(robber_id, guild_id).await?;
        let victim = repo.get_or_create(target.user_id, guild_id).await?;

        ensure_funds(rob::MIN_BALANCE, robber.balance)?;
        if victim.balance < rob::MIN_BALANCE {
            return Err(EconomyError::InvalidTarget(
                "They don't have enough money to rob!".to_string(),
            )
            .into());
        }

        let outcome = rob::settle(robber.balance, victim.balance, draw);
        match outcome {
            RobOutcome::Stole(amount) => {
                repo.adjust(robber_id, guild_id, BalanceField::Balance, amount)
                    .await?;
                repo.adjust(target.user_id, guild_id, BalanceField::Balance, -amount)
                    .await?;
            }
            RobOutcome::Caught(fine) => {
                repo.adjust(robber_id, guild_id, BalanceField::Balance, -fine)
                    .await?;
            }
        }

        let robber = reload(&repo, robber_id, guild_id).await?;
        let target = reload(&repo, target.user_id, guild_id).await?;
        txn.commit().await?;

        Ok(RobReceipt {
            outcome,
            robber,
            target,
        })
    }
}
