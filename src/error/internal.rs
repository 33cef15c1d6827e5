use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Surfaces to the user as a generic failure message.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored giveaway winner list is not valid JSON.
    #[error("Giveaway {giveaway_id} has a corrupt winner list: {source}")]
    CorruptWinnerList {
        giveaway_id: i32,
        #[source]
        source: serde_json::Error,
    },
}
