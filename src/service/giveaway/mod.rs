//! Giveaway service for creating, resolving and overriding giveaways.
//!
//! A giveaway moves from open to resolved exactly once. Resolution collects the live
//! reactions on the announcement, applies the optional forced winner, draws winners
//! without replacement and records them in the same conditional update that closes the
//! giveaway. Only the call that performed that update talks to the platform, so repeated
//! or concurrent resolutions are harmless.
//!
//! - `create` - Announcement and persistence
//! - `resolve` - Participant collection, drawing and emission
//! - `platform` - The chat collaborator trait

pub mod create;
pub mod platform;
pub mod resolve;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::{
    data::giveaway::GiveawayRepository,
    error::{giveaway::GiveawayError, AppError},
    model::giveaway::Giveaway,
};

use self::platform::GiveawayPlatform;

/// Service providing giveaway operations.
pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn GiveawayPlatform,
    /// Upper bound on `fetch_reactors` before resolving with no participants.
    reaction_timeout: Duration,
}

impl<'a> GiveawayService<'a> {
    /// Creates a new GiveawayService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `platform` - Chat collaborator used for announcements and results
    /// - `reaction_timeout` - Bound on fetching reactions at resolution time
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn GiveawayPlatform,
        reaction_timeout: Duration,
    ) -> Self {
        Self {
            db,
            platform,
            reaction_timeout,
        }
    }

    /// Sets the winner of an open giveaway ahead of resolution.
    ///
    /// # Returns
    /// - `Ok(())` - Override stored
    /// - `Err(AppError::GiveawayErr(GiveawayNotFound))` - Missing or already resolved
    pub async fn force_winner(&self, id: i32, user_id: u64) -> Result<(), AppError> {
        let repo = GiveawayRepository::new(self.db);

        if !repo.set_forced_winner(id, user_id).await? {
            return Err(GiveawayError::GiveawayNotFound.into());
        }

        tracing::info!("Forced winner {} set for giveaway {}", user_id, id);

        Ok(())
    }

    /// Sets the winner of the open giveaway announced by `message_id`.
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The giveaway the override was applied to
    /// - `Err(AppError::GiveawayErr(GiveawayNotFound))` - No open giveaway uses that message
    pub async fn force_winner_by_message(
        &self,
        guild_id: u64,
        message_id: u64,
        user_id: u64,
    ) -> Result<Giveaway, AppError> {
        let repo = GiveawayRepository::new(self.db);

        let Some(giveaway) = repo.find_open_by_message_id(guild_id, message_id).await? else {
            return Err(GiveawayError::GiveawayNotFound.into());
        };

        self.force_winner(giveaway.id, user_id).await?;

        Ok(giveaway)
    }
}
