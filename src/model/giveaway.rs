//! Domain & parameter models for giveaway operations
//!
//! Defines the giveaway domain model, the parameters used to create one, and the
//! outcome types produced when a giveaway resolves.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Emoji participants react with to enter.
pub const ENTRY_EMOJI: &str = "🎉";

/// The giveaway domain model
///
/// A giveaway is `Open` until `ended` flips to true exactly once, at which point the
/// winner list drawn for it is stored alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Announcement message participants react to.
    pub message_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub winners_count: u32,
    /// Epoch milliseconds, fixed at creation.
    pub end_time: i64,
    pub ended: bool,
    pub forced_winner: Option<u64>,
    /// Winners recorded at resolution, `None` while open.
    pub winners: Option<Vec<u64>>,
    pub created_at: DateTime<Utc>,
}

impl Giveaway {
    /// Converts an entity model to the giveaway domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The converted giveaway domain model
    /// - `Err(AppError::InternalErr(CorruptWinnerList))` - Stored winners are not a JSON list
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored winner id is not a u64
    pub fn from_entity(entity: entity::giveaway::Model) -> Result<Self, AppError> {
        let winners = match entity.winners {
            Some(raw) => {
                let ids: Vec<String> = serde_json::from_str(&raw).map_err(|source| {
                    InternalError::CorruptWinnerList {
                        giveaway_id: entity.id,
                        source,
                    }
                })?;

                Some(
                    ids.into_iter()
                        .map(parse_u64_from_string)
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
            None => None,
        };

        Ok(Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            channel_id: entity.channel_id as u64,
            message_id: entity.message_id as u64,
            host_id: entity.host_id as u64,
            prize: entity.prize,
            winners_count: entity.winners_count.max(1) as u32,
            end_time: entity.end_time,
            ended: entity.ended,
            forced_winner: entity.forced_winner.map(|id| id as u64),
            winners,
            created_at: entity.created_at,
        })
    }

    /// Whether the end time has been reached at `now_ms`.
    pub fn is_due(&self, now_ms: i64) -> bool {
        now_ms >= self.end_time
    }
}

/// Parameters for persisting a new giveaway once its announcement is posted
#[derive(Debug, Clone)]
pub struct CreateGiveawayParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub winners_count: u32,
    pub end_time: i64,
}

/// Announcement content handed to the platform before the giveaway is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnnouncement {
    pub channel_id: u64,
    pub host_id: u64,
    pub prize: String,
    pub winners_count: u32,
    pub end_time: i64,
}

/// A user that reacted to an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactor {
    pub user_id: u64,
    pub bot: bool,
}

/// Result of drawing a giveaway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GiveawayOutcome {
    /// Winners in draw order, never empty and never repeating.
    Winners(Vec<u64>),
    /// Nobody eligible entered and no override was set.
    NoWinners,
}

impl GiveawayOutcome {
    pub fn from_winners(winners: Vec<u64>) -> Self {
        if winners.is_empty() {
            Self::NoWinners
        } else {
            Self::Winners(winners)
        }
    }

    pub fn winners(&self) -> &[u64] {
        match self {
            Self::Winners(winners) => winners,
            Self::NoWinners => &[],
        }
    }
}

/// Outcome of a `resolve` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: GiveawayOutcome,
    /// True only for the call that flipped `ended` and emitted the result.
    pub newly_resolved: bool,
}
