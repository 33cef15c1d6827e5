//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that
//! sea-orm types never leak into the service layer. Discord snowflakes are stored as
//! signed integers and exposed here as `u64`.

pub mod account;
pub mod giveaway;
