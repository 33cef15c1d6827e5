//! Giveaway commands: starting a giveaway and the silent winner override.

use chrono::Duration;
use serenity::{all::Permissions, async_trait};

use crate::{
    error::{giveaway::GiveawayError, AppError},
    service::giveaway::create::StartGiveaway,
};

use super::{Command, CommandContext, CommandRegistry, Invocation, Reply};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(StartGiveawayCommand));
    registry.register(Box::new(SetWinner));
}

/// Giveaway arguments after the duration has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiveawayArgs {
    pub minutes: i64,
    pub winners_count: u32,
    pub prize: String,
}

/// Parses `<minutes> [winners] <prize…>`.
///
/// A numeric second token is the winner count, otherwise a single winner is drawn and
/// the prize starts at the second token. Returns `None` when the duration is not a
/// number or the prize is empty.
pub fn parse_giveaway_args(args: &[&str]) -> Option<GiveawayArgs> {
    let minutes = args.first()?.parse::<i64>().ok()?;

    let (winners_count, prize_start) = match args.get(1).and_then(|arg| arg.parse::<u32>().ok()) {
        Some(count) => (count, 2),
        None => (1, 1),
    };

    let prize = args.get(prize_start..).unwrap_or_default().join(" ");
    if prize.is_empty() {
        return None;
    }

    Some(GiveawayArgs {
        minutes,
        winners_count,
        prize,
    })
}

pub struct StartGiveawayCommand;

#[async_trait]
impl Command for StartGiveawayCommand {
    fn name(&self) -> &'static str {
        "giveaway"
    }

    fn usage(&self) -> &'static str {
        "giveaway <time_in_minutes> [winners] <prize>"
    }

    fn category(&self) -> &'static str {
        "giveaway"
    }

    fn required_permission(&self) -> Option<(Permissions, &'static str)> {
        Some((Permissions::MANAGE_GUILD, "Manage Server"))
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let Some(args) = parse_giveaway_args(&invocation.plain_args()) else {
            return Err(AppError::Usage(format!("{}{}", ctx.prefix, self.usage())));
        };

        let duration =
            Duration::try_minutes(args.minutes).ok_or(GiveawayError::InvalidDuration)?;

        let giveaway = ctx
            .giveaways
            .create(
                StartGiveaway {
                    guild_id: invocation.guild_id,
                    channel_id: invocation.channel_id,
                    host_id: invocation.author_id,
                    prize: args.prize,
                    winners_count: args.winners_count,
                    duration,
                },
                invocation.now_ms,
            )
            .await?;

        Ok(Reply::Text(format!(
            "✅ Giveaway started for **{}**! Ends in {} minutes.",
            giveaway.prize, args.minutes
        )))
    }
}

/// `sp <messageId> @user`: quietly forces the winner of an open giveaway.
pub struct SetWinner;

#[async_trait]
impl Command for SetWinner {
    fn name(&self) -> &'static str {
        "sp"
    }

    fn usage(&self) -> &'static str {
        "sp <messageId> @user"
    }

    fn category(&self) -> &'static str {
        "giveaway"
    }

    fn required_permission(&self) -> Option<(Permissions, &'static str)> {
        Some((Permissions::ADMINISTRATOR, "Administrator"))
    }

    fn silent(&self) -> bool {
        true
    }

    async fn execute(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
    ) -> Result<Reply, AppError> {
        let args = invocation.plain_args();
        let (Some(message_id), Some(winner)) = (args.first(), invocation.first_mention()) else {
            return Ok(Reply::Nothing);
        };

        // An unparsable id cannot match any giveaway.
        let Ok(message_id) = message_id.parse::<u64>() else {
            return Ok(Reply::DeleteInvocation);
        };

        match ctx
            .giveaways
            .force_winner_by_message(invocation.guild_id, message_id, winner.user_id)
            .await
        {
            Ok(_) | Err(AppError::GiveawayErr(GiveawayError::GiveawayNotFound)) => {
                Ok(Reply::DeleteInvocation)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_second_token_is_winner_count() {
        let args = parse_giveaway_args(&["30", "3", "Nitro", "Classic"]).unwrap();

        assert_eq!(
            args,
            GiveawayArgs {
                minutes: 30,
                winners_count: 3,
                prize: "Nitro Classic".to_string(),
            }
        );
    }

    #[test]
    fn winner_count_defaults_to_one() {
        let args = parse_giveaway_args(&["10", "Steam", "key"]).unwrap();

        assert_eq!(args.winners_count, 1);
        assert_eq!(args.prize, "Steam key");
    }

    #[test]
    fn rejects_missing_duration_or_prize() {
        assert!(parse_giveaway_args(&[]).is_none());
        assert!(parse_giveaway_args(&["soon", "Nitro"]).is_none());
        assert!(parse_giveaway_args(&["10"]).is_none());
        assert!(parse_giveaway_args(&["10", "2"]).is_none());
    }
}
