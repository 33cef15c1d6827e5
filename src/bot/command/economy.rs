//! Ledger commands: balances, timed income, transfers, robbery and admin grants.

use rand::{rngs::StdRng, SeedableRng};
use serenity::{all::Permissions, async_trait};

use crate::{
    error::{economy::EconomyError, AppError},
    game::rob::RobOutcome,
    service::economy::EconomyService,
    util::{
        format::format_money,
        parse::{parse_amount, parse_amount_or_all},
    },
};

use super::{
    Command, CommandContext, CommandRegistry, Invocation, Mention, Reply, ReplyEmbed,
    EMBED_COLOR_GOLD,
};

const BALTOP_LIMIT: usize = 10;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(Balance));
    registry.register(Box::new(Daily));
    registry.register(Box::new(Work));
    registry.register(Box::new(Crime));
    registry.register(Box::new(Deposit));
    registry.register(Box::new(Withdraw));
    registry.register(Box::new(Pay));
    registry.register(Box::new(Rob));
    registry.register(Box::new(AddMoney));
    registry.register(Box::new(BalTop));
}

/// First mentioned user, or `InvalidTarget` with `missing` as the reason.
fn require_target<'i>(invocation: &'i Invocation, missing: &str) -> Result<&'i Mention, AppError> {
    invocation
        .first_mention()
        .ok_or_else(|| EconomyError::InvalidTarget(missing.to_string()).into())
}

pub struct Balance;

#[async_trait]
impl Command for Balance {
    fn name(&self) -> &'static str {
        "bal"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["balance"]
    }

    fn usage(&self) -> &'static str {
        "bal [@user]"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let (user_id, name) = match invocation.first_mention() {
            Some(mention) => (mention.user_id, mention.name.as_str()),
            None => (invocation.author_id, invocation.author_name.as_str()),
        };

        let account = EconomyService::new(ctx.db)
            .balance(user_id, invocation.guild_id)
            .await?;

        Ok(Reply::Embed(ReplyEmbed {
            title: format!("💰 {}'s Balance", name),
            fields: vec![
                ("Wallet".to_string(), format_money(account.balance), true),
                ("Bank".to_string(), format_money(account.bank), true),
                ("Total".to_string(), format_money(account.total()), true),
            ],
            color: EMBED_COLOR_GOLD,
            ..Default::default()
        }))
    }
}

pub struct Daily;

#[async_trait]
impl Command for Daily {
    fn name(&self) -> &'static str {
        "daily"
    }

    fn usage(&self) -> &'static str {
        "daily"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let earning = EconomyService::new(ctx.db)
            .claim_daily(invocation.author_id, invocation.guild_id, invocation.now_ms)
            .await?;

        Ok(Reply::Text(format!(
            "✅ You claimed your daily reward of **{}**!",
            format_money(earning.amount)
        )))
    }
}

pub struct Work;

#[async_trait]
impl Command for Work {
    fn name(&self) -> &'static str {
        "work"
    }

    fn usage(&self) -> &'static str {
        "work"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let mut rng = StdRng::from_os_rng();
        let earning = EconomyService::new(ctx.db)
            .work(
                invocation.author_id,
                invocation.guild_id,
                invocation.now_ms,
                &mut rng,
            )
            .await?;

        Ok(Reply::Text(format!(
            "💼 You worked as a {} and earned **{}**!",
            earning.job.unwrap_or("freelancer"),
            format_money(earning.amount)
        )))
    }
}

pub struct Crime;

#[async_trait]
impl Command for Crime {
    fn name(&self) -> &'static str {
        "crime"
    }

    fn usage(&self) -> &'static str {
        "crime"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let mut rng = StdRng::from_os_rng();
        let earning = EconomyService::new(ctx.db)
            .crime(
                invocation.author_id,
                invocation.guild_id,
                invocation.now_ms,
                &mut rng,
            )
            .await?;

        let text = if earning.amount > 0 {
            format!(
                "🎭 Crime successful! You stole **{}**!",
                format_money(earning.amount)
            )
        } else {
            format!(
                "🚓 You got caught! Lost **{}**!",
                format_money(-earning.amount)
            )
        };

        Ok(Reply::Text(text))
    }
}

pub struct Deposit;

#[async_trait]
impl Command for Deposit {
    fn name(&self) -> &'static str {
        "dep"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["deposit"]
    }

    fn usage(&self) -> &'static str {
        "dep <amount|all>"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let amount = parse_amount_or_all(invocation.plain_args().first().copied())?;
        let transfer = EconomyService::new(ctx.db)
            .deposit(invocation.author_id, invocation.guild_id, amount)
            .await?;

        Ok(Reply::Text(format!(
            "🏦 Deposited **{}** to your bank!",
            format_money(transfer.amount)
        )))
    }
}

pub struct Withdraw;

#[async_trait]
impl Command for Withdraw {
    fn name(&self) -> &'static str {
        "with"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["withdraw"]
    }

    fn usage(&self) -> &'static str {
        "with <amount|all>"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let amount = parse_amount_or_all(invocation.plain_args().first().copied())?;
        let transfer = EconomyService::new(ctx.db)
            .withdraw(invocation.author_id, invocation.guild_id, amount)
            .await?;

        Ok(Reply::Text(format!(
            "💵 Withdrew **{}** from your bank!",
            format_money(transfer.amount)
        )))
    }
}

pub struct Pay;

#[async_trait]
impl Command for Pay {
    fn name(&self) -> &'static str {
        "pay"
    }

    fn usage(&self) -> &'static str {
        "pay @user <amount>"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let target = require_target(invocation, "Mention someone to pay!")?;
        let amount = parse_amount(invocation.plain_args().first().copied())?;

        let transfer = EconomyService::new(ctx.db)
            .pay(
                invocation.guild_id,
                invocation.author_id,
                target.member(),
                amount,
            )
            .await?;

        Ok(Reply::Text(format!(
            "💸 Sent **{}** to {}!",
            format_money(transfer.amount),
            target.name
        )))
    }
}

pub struct Rob;

#[async_trait]
impl Command for Rob {
    fn name(&self) -> &'static str {
        "rob"
    }

    fn usage(&self) -> &'static str {
        "rob @user"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let target = require_target(invocation, "Mention someone to rob!")?;
        let mut rng = StdRng::from_os_rng();

        let receipt = EconomyService::new(ctx.db)
            .rob(
                invocation.guild_id,
                invocation.author_id,
                target.member(),
                &mut rng,
            )
            .await?;

        let text = match receipt.outcome {
            RobOutcome::Stole(amount) => format!(
                "🎭 Successfully robbed **{}** from {}!",
                format_money(amount),
                target.name
            ),
            RobOutcome::Caught(fine) => {
                format!("🚓 You got caught! Lost **{}**!", format_money(fine))
            }
        };

        Ok(Reply::Text(text))
    }
}

pub struct AddMoney;

#[async_trait]
impl Command for AddMoney {
    fn name(&self) -> &'static str {
        "addmoney"
    }

    fn usage(&self) -> &'static str {
        "addmoney @user <amount>"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    fn required_permission(&self) -> Option<(Permissions, &'static str)> {
        Some((Permissions::ADMINISTRATOR, "Administrator"))
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let usage = || AppError::Usage(format!("{}{}", ctx.prefix, self.usage()));

        let target = invocation.first_mention().ok_or_else(usage)?;
        let amount = invocation
            .plain_args()
            .first()
            .and_then(|arg| arg.parse::<i64>().ok())
            .ok_or_else(usage)?;

        EconomyService::new(ctx.db)
            .add_money(
                invocation.guild_id,
                target.member(),
                amount,
            )
            .await?;

        Ok(Reply::Text(format!(
            "✅ Added **{}** to {}!",
            format_money(amount),
            target.name
        )))
    }
}

pub struct BalTop;

#[async_trait]
impl Command for BalTop {
    fn name(&self) -> &'static str {
        "baltop"
    }

    fn usage(&self) -> &'static str {
        "baltop"
    }

    fn category(&self) -> &'static str {
        "economy"
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let top = EconomyService::new(ctx.db)
            .leaderboard(invocation.guild_id, BALTOP_LIMIT)
            .await?;

        let description = if top.is_empty() {
            "No data".to_string()
        } else {
            top.iter()
                .enumerate()
                .map(|(rank, account)| {
                    format!(
                        "{}. <@{}> - {}",
                        rank + 1,
                        account.user_id,
                        format_money(account.total())
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        Ok(Reply::Embed(ReplyEmbed {
            title: "💰 Top 10 Richest Users".to_string(),
            description: Some(description),
            color: EMBED_COLOR_GOLD,
            ..Default::default()
        }))
    }
}
