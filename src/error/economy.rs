use chrono::Duration;
use thiserror::Error;

/// Rejections raised by ledger operations before any mutation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Bet or transfer amount is missing, non-numeric, not positive or above the cap.
    #[error("Amount must be a positive whole number")]
    InvalidAmount,

    /// Requested amount exceeds what the wallet or bank holds.
    #[error("Requested {requested} but only {available} is available")]
    InsufficientFunds { requested: i64, available: i64 },

    /// Timed action attempted inside its cooldown window.
    #[error("Action is on cooldown for another {}s", remaining.num_seconds())]
    CooldownActive { remaining: Duration },

    /// Missing, self-referential or otherwise unusable counterpart.
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Game choice outside the accepted set.
    #[error("Invalid choice, expected {0}")]
    InvalidChoice(String),
}
