//! Collaborator interface between the giveaway service and the chat platform.

use serenity::async_trait;

use crate::{
    error::AppError,
    model::giveaway::{Giveaway, GiveawayOutcome, NewAnnouncement, Reactor},
};

/// Chat-side operations a giveaway needs.
///
/// Implemented over the Discord HTTP client in production and by an in-memory
/// recorder in tests.
#[async_trait]
pub trait GiveawayPlatform: Send + Sync {
    /// Posts the announcement, adds the entry reaction and returns the message id.
    async fn send_announcement(&self, announcement: &NewAnnouncement) -> Result<u64, AppError>;

    /// Lists every user that reacted to `message_id` with `emoji`.
    async fn fetch_reactors(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<Vec<Reactor>, AppError>;

    /// Rewrites the announcement to show the result.
    async fn edit_message(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError>;

    /// Posts the congratulation, or the "not enough participants" notice.
    async fn publish_outcome(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError>;
}
