//! Giveaway creation.

use chrono::Duration;

use crate::{
    data::giveaway::GiveawayRepository,
    error::{giveaway::GiveawayError, AppError},
    model::giveaway::{CreateGiveawayParam, Giveaway, NewAnnouncement},
};

use super::GiveawayService;

/// Request to start a giveaway in a channel.
#[derive(Debug, Clone)]
pub struct StartGiveaway {
    pub guild_id: u64,
    pub channel_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub winners_count: u32,
    pub duration: Duration,
}

impl<'a> GiveawayService<'a> {
    /// Announces and persists a new open giveaway.
    ///
    /// The end time is fixed here as `now + duration` and never changes afterwards.
    /// Arming the timer is left to the scheduler.
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The stored giveaway carrying the announcement's message id
    /// - `Err(AppError::GiveawayErr(InvalidDuration))` - Duration is not positive or the end time overflows
    /// - `Err(AppError::GiveawayErr(InvalidWinnerCount))` - Fewer than one winner or above `i32::MAX`
    /// - `Err(AppError::DiscordErr)` - Announcement could not be posted
    pub async fn create(&self, request: StartGiveaway, now_ms: i64) -> Result<Giveaway, AppError> {
        if request.duration <= Duration::zero() {
            return Err(GiveawayError::InvalidDuration.into());
        }
        if request.winners_count < 1 || i32::try_from(request.winners_count).is_err() {
            return Err(GiveawayError::InvalidWinnerCount.into());
        }

        let end_time = now_ms
            .checked_add(request.duration.num_milliseconds())
            .ok_or(GiveawayError::InvalidDuration)?;

        let message_id = self
            .platform
            .send_announcement(&NewAnnouncement {
                channel_id: request.channel_id,
                host_id: request.host_id,
                prize: request.prize.clone(),
                winners_count: request.winners_count,
                end_time,
            })
            .await?;

        let giveaway = GiveawayRepository::new(self.db)
            .create(CreateGiveawayParam {
                guild_id: request.guild_id,
                channel_id: request.channel_id,
                message_id,
                host_id: request.host_id,
                prize: request.prize,
                winners_count: request.winners_count,
                end_time,
            })
            .await?;

        tracing::info!(
            "Giveaway {} for '{}' created in channel {}, ends at {}",
            giveaway.id,
            giveaway.prize,
            giveaway.channel_id,
            giveaway.end_time
        );

        Ok(giveaway)
    }
}
