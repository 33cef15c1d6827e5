use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = ".";
const DEFAULT_REACTION_FETCH_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Prefix every text command must start with.
    pub command_prefix: String,
    /// Upper bound on fetching giveaway reactions before resolving with no participants.
    pub reaction_fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .ok()
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            reaction_fetch_timeout: Duration::from_secs(parse_optional_u64(
                "REACTION_FETCH_TIMEOUT_SECS",
                DEFAULT_REACTION_FETCH_TIMEOUT_SECS,
            )?),
        })
    }
}

/// Reads an optional numeric environment variable, falling back to `default` when unset.
fn parse_optional_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}
