//! Bot state shared across all event handlers.
//!
//! Initialized once during startup and cloned into the serenity event handler. All
//! fields are cheap to clone: the database connection is a pool, the scheduler wraps
//! reference-counted handles and the registry sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{bot::command::CommandRegistry, scheduler::giveaway::GiveawayScheduler};

#[derive(Clone)]
pub struct BotState {
    pub db: DatabaseConnection,
    pub giveaways: GiveawayScheduler,
    pub registry: Arc<CommandRegistry>,
    pub prefix: String,
}

impl BotState {
    pub fn new(
        db: DatabaseConnection,
        giveaways: GiveawayScheduler,
        registry: CommandRegistry,
        prefix: String,
    ) -> Self {
        Self {
            db,
            giveaways,
            registry: Arc::new(registry),
            prefix,
        }
    }
}
