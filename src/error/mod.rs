//! Error types and user-facing message mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors. Domain rejections carry a
//! message meant for the invoking user, while infrastructure failures are logged and
//! replaced by a generic reply so no internals leak into a chat channel.

pub mod config;
pub mod economy;
pub mod giveaway;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, economy::EconomyError, giveaway::GiveawayError, internal::InternalError},
    util::format::{format_duration, format_money},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Ledger rejection (bad amount, short funds, cooldown, bad target).
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Giveaway rejection (unknown giveaway, bad duration).
    #[error(transparent)]
    GiveawayErr(#[from] GiveawayError),

    /// Internal invariant violation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Invoker lacks the guild permission a command requires.
    ///
    /// # Fields
    /// - Name of the missing permission
    #[error("Missing permission: {0}")]
    PermissionDenied(&'static str),

    /// Command was invoked with the wrong arguments.
    ///
    /// # Fields
    /// - Usage line shown back to the user
    #[error("{0}")]
    Usage(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the reply shown to the user who ran the command.
    ///
    /// Maps each domain rejection to a specific message. Infrastructure errors (database,
    /// Discord, scheduler, internal) are logged at error level and collapse into a generic
    /// message to avoid leaking implementation details.
    pub fn user_message(&self) -> String {
        match self {
            Self::EconomyErr(err) => match err {
                EconomyError::InvalidAmount => "❌ Specify a valid amount!".to_string(),
                EconomyError::InsufficientFunds {
                    requested,
                    available,
                } => format!(
                    "❌ You don't have that much money! Needed {}, have {}.",
                    format_money(*requested),
                    format_money(*available)
                ),
                EconomyError::CooldownActive { remaining } => format!(
                    "⏰ Slow down! Try again in {}.",
                    format_duration(*remaining)
                ),
                EconomyError::InvalidTarget(reason) => format!("❌ {}", reason),
                EconomyError::InvalidChoice(expected) => format!("❌ Choose {}!", expected),
            },
            Self::GiveawayErr(err) => format!("❌ {}.", err),
            Self::Usage(usage) => format!("❌ Usage: {}", usage),
            Self::PermissionDenied(permission) => {
                format!("❌ You need the {} permission!", permission)
            }
            err => {
                tracing::error!("Command failed: {}", err);
                "❌ An error occurred while executing this command!".to_string()
            }
        }
    }

    /// Whether this error is a rejection of the user's request rather than a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EconomyErr(_) | Self::GiveawayErr(_) | Self::Usage(_) | Self::PermissionDenied(_)
        )
    }
}
