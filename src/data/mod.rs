//! Repositories over the sea-orm entities.
//!
//! Repositories own every query and convert entity models into domain models, so the
//! service layer never touches sea-orm types directly.

pub mod account;
pub mod giveaway;

#[cfg(test)]
mod test;
