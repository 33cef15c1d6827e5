use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GiveawayError {
    /// Giveaway does not exist or has already ended.
    ///
    /// Timer-triggered resolution treats this as a silent no-op; the force-winner
    /// command reports it to the caller.
    #[error("Giveaway not found or already ended")]
    GiveawayNotFound,

    /// Duration was zero, negative, or too large for an epoch-millisecond end time.
    #[error("Giveaway duration must be a positive number of minutes within range")]
    InvalidDuration,

    /// Winner count was below one or does not fit the stored column.
    #[error("Giveaway needs a winner count between 1 and {}", i32::MAX)]
    InvalidWinnerCount,
}
