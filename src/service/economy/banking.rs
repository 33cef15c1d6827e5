//! Balance inquiries and fund movements that involve no randomness.

use sea_orm::TransactionTrait;

use crate::{
    data::account::AccountRepository,
    error::{economy::EconomyError, AppError},
    model::account::{Account, BalanceField, Member, MAX_AMOUNT, MAX_BALANCE},
    util::parse::AmountArg,
};

use super::{ensure_funds, reload, EconomyService, Transfer};

impl<'a> EconomyService<'a> {
    /// Reads an account, creating it on first use.
    pub async fn balance(&self, user_id: u64, guild_id: u64) -> Result<Account, AppError> {
        Ok(AccountRepository::new(self.db)
            .get_or_create(user_id, guild_id)
            .await?)
    }

    /// Moves funds from the wallet into the bank.
    ///
    /// # Returns
    /// - `Ok(Transfer)` - Amount moved and the updated account
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `all` of an empty wallet
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Wallet holds less than requested
    pub async fn deposit(
        &self,
        user_id: u64,
        guild_id: u64,
        amount: AmountArg,
    ) -> Result<Transfer, AppError> {
        self.move_between(user_id, guild_id, amount, BalanceField::Balance, BalanceField::Bank)
            .await
    }

    /// Moves funds from the bank back into the wallet.
    ///
    /// # Returns
    /// - `Ok(Transfer)` - Amount moved and the updated account
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - `all` of an empty bank
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Bank holds less than requested
    pub async fn withdraw(
        &self,
        user_id: u64,
        guild_id: u64,
        amount: AmountArg,
    ) -> Result<Transfer, AppError> {
        self.move_between(user_id, guild_id, amount, BalanceField::Bank, BalanceField::Balance)
            .await
    }

    async fn move_between(
        &self,
        user_id: u64,
        guild_id: u64,
        amount: AmountArg,
        from: BalanceField,
        to: BalanceField,
    ) -> Result<Transfer, AppError> {
        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let account = repo.get_or_create(user_id, guild_id).await?;
        let available = match from {
            BalanceField::Balance => account.balance,
            BalanceField::Bank => account.bank,
        };

        let amount = match amount {
            AmountArg::All => available,
            AmountArg::Exact(amount) => amount,
        };
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount.into());
        }
        ensure_funds(amount, available)?;

        repo.adjust(user_id, guild_id, from, -amount).await?;
        repo.adjust(user_id, guild_id, to, amount).await?;

        let account = reload(&repo, user_id, guild_id).await?;
        txn.commit().await?;

        Ok(Transfer { amount, account })
    }

    /// Sends wallet funds to another member of the guild.
    ///
    /// Both sides change in the same transaction, so the sum of the two wallets is
    /// conserved.
    ///
    /// # Returns
    /// - `Ok(Transfer)` - Amount sent and the sender's updated account
    /// - `Err(AppError::EconomyErr(InvalidTarget))` - Paying yourself or a bot
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - Amount is not positive
    /// - `Err(AppError::EconomyErr(InsufficientFunds))` - Sender's wallet is short
    pub async fn pay(
        &self,
        guild_id: u64,
        sender_id: u64,
        recipient: Member,
        amount: i64,
    ) -> Result<Transfer, AppError> {
        if recipient.user_id == sender_id {
            return Err(EconomyError::InvalidTarget("You can't pay yourself!".to_string()).into());
        }
        if recipient.bot {
            return Err(EconomyError::InvalidTarget("You can't pay a bot!".to_string()).into());
        }
        if amount <= 0 {
            return Err(EconomyError::InvalidAmount.into());
        }

        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let sender = repo.get_or_create(sender_id, guild_id).await?;
        ensure_funds(amount, sender.balance)?;
        repo.get_or_create(recipient.user_id, guild_id).await?;

        repo.adjust(sender_id, guild_id, BalanceField::Balance, -amount)
            .await?;
        repo.adjust(recipient.user_id, guild_id, BalanceField::Balance, amount)
            .await?;

        let account = reload(&repo, sender_id, guild_id).await?;
        txn.commit().await?;

        Ok(Transfer { amount, account })
    }

    /// Credits a member's wallet out of thin air. Permission checks belong to the caller.
    ///
    /// # Returns
    /// - `Ok(Account)` - The recipient's updated account
    /// - `Err(AppError::EconomyErr(InvalidAmount))` - Amount is not positive, above
    ///   `MAX_AMOUNT`, or would lift the wallet past `MAX_BALANCE`
    /// - `Err(AppError::EconomyErr(InvalidTarget))` - Recipient is a bot
    pub async fn add_money(
        &self,
        guild_id: u64,
        recipient: Member,
        amount: i64,
    ) -> Result<Account, AppError> {
        if recipient.bot {
            return Err(
                EconomyError::InvalidTarget("Bots don't have accounts!".to_string()).into(),
            );
        }
        if amount <= 0 || amount > MAX_AMOUNT {
            return Err(EconomyError::InvalidAmount.into());
        }

        let txn = self.db.begin().await?;
        let repo = AccountRepository::new(&txn);

        let current = repo.get_or_create(recipient.user_id, guild_id).await?;
        if current.balance > MAX_BALANCE - amount {
            return Err(EconomyError::InvalidAmount.into());
        }

        repo.adjust(recipient.user_id, guild_id, BalanceField::Balance, amount)
            .await?;

        let account = reload(&repo, recipient.user_id, guild_id).await?;
        txn.commit().await?;

        Ok(account)
    }

    /// Richest members of the guild by wallet plus bank.
    pub async fn leaderboard(&self, guild_id: u64, limit: usize) -> Result<Vec<Account>, AppError> {
        Ok(AccountRepository::new(self.db)
            .top_by_total(guild_id, limit)
            .await?)
    }
}
