//! Service layer for business logic and orchestration.
//!
//! Services sit between the command dispatcher and the data (repository) layer. They
//! implement validation and business rules, coordinate repository calls inside
//! transactions, and drive external collaborators such as the giveaway platform.

pub mod economy;
pub mod giveaway;
