//! Discord implementation of the giveaway platform.
//!
//! Announcements and results are posted through the shared `Http` client, so the
//! scheduler can resolve giveaways without holding a gateway context.

use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, MessageId,
        ReactionType, UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    model::giveaway::{Giveaway, GiveawayOutcome, NewAnnouncement, Reactor, ENTRY_EMOJI},
    service::giveaway::platform::GiveawayPlatform,
};

const ANNOUNCEMENT_COLOR: u32 = 0xFF69B4;
const ENDED_COLOR: u32 = 0x00FF00;

/// Discord caps reaction user pages at 100.
const REACTION_PAGE_SIZE: u8 = 100;

/// Giveaway platform backed by the Discord REST API.
pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Fetches the host's display name, falling back to a plain id label.
    async fn host_name(&self, host_id: u64) -> String {
        match self.http.get_user(UserId::new(host_id)).await {
            Ok(user) => user.global_name.unwrap_or(user.name),
            Err(e) => {
                tracing::warn!("Failed to fetch giveaway host {}: {}", host_id, e);
                format!("User {}", host_id)
            }
        }
    }
}

/// `<@a>, <@b>` for the given user ids.
pub fn winner_mentions(winners: &[u64]) -> String {
    winners
        .iter()
        .map(|id| format!("<@{}>", id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn announcement_description(prize: &str, winners_count: u32, end_time_ms: i64) -> String {
    format!(
        "**Prize:** {}\n**Winners:** {}\n**Ends:** <t:{}:R>\n\nReact with {} to enter!",
        prize,
        winners_count,
        end_time_ms / 1000,
        ENTRY_EMOJI
    )
}

/// Channel message announcing the result of a giveaway.
pub fn outcome_message(prize: &str, outcome: &GiveawayOutcome) -> String {
    match outcome {
        GiveawayOutcome::Winners(winners) => format!(
            "🎉 Congratulations {}! You won **{}**!",
            winner_mentions(winners),
            prize
        ),
        GiveawayOutcome::NoWinners => format!("❌ Not enough participants for **{}**!", prize),
    }
}

#[async_trait]
impl GiveawayPlatform for SerenityPlatform {
    async fn send_announcement(&self, announcement: &NewAnnouncement) -> Result<u64, AppError> {
        let host_name = self.host_name(announcement.host_id).await;

        let embed = CreateEmbed::new()
            .title(format!("{} GIVEAWAY {}", ENTRY_EMOJI, ENTRY_EMOJI))
            .color(ANNOUNCEMENT_COLOR)
            .description(announcement_description(
                &announcement.prize,
                announcement.winners_count,
                announcement.end_time,
            ))
            .footer(CreateEmbedFooter::new(format!("Hosted by {}", host_name)));

        let message = ChannelId::new(announcement.channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        message
            .react(&self.http, ReactionType::Unicode(ENTRY_EMOJI.to_string()))
            .await?;

        Ok(message.id.get())
    }

    async fn fetch_reactors(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<Vec<Reactor>, AppError> {
        let reaction = ReactionType::Unicode(emoji.to_string());
        let mut reactors = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_reaction_users(
                    ChannelId::new(channel_id),
                    MessageId::new(message_id),
                    &reaction,
                    REACTION_PAGE_SIZE,
                    after,
                )
                .await?;

            let page_len = page.len();
            after = page.last().map(|user| user.id.get());

            reactors.extend(page.into_iter().map(|user| Reactor {
                user_id: user.id.get(),
                bot: user.bot,
            }));

            if page_len < usize::from(REACTION_PAGE_SIZE) {
                break;
            }
        }

        Ok(reactors)
    }

    async fn edit_message(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError> {
        let winners = match outcome {
            GiveawayOutcome::Winners(winners) => winner_mentions(winners),
            GiveawayOutcome::NoWinners => "No valid entries".to_string(),
        };
        let host_name = self.host_name(giveaway.host_id).await;

        let embed = CreateEmbed::new()
            .title(format!("{} GIVEAWAY ENDED {}", ENTRY_EMOJI, ENTRY_EMOJI))
            .color(ENDED_COLOR)
            .description(format!(
                "**Prize:** {}\n**Winners:** {}",
                giveaway.prize, winners
            ))
            .footer(CreateEmbedFooter::new(format!("Hosted by {}", host_name)));

        ChannelId::new(giveaway.channel_id)
            .edit_message(
                &self.http,
                MessageId::new(giveaway.message_id),
                EditMessage::new().embed(embed),
            )
            .await?;

        Ok(())
    }

    async fn publish_outcome(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError> {
        ChannelId::new(giveaway.channel_id)
            .say(&self.http, outcome_message(&giveaway.prize, outcome))
            .await?;

        Ok(())
    }
}
