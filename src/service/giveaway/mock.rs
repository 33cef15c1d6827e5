//! In-memory `GiveawayPlatform` that records every call.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::Duration,
};

use serenity::async_trait;

use crate::{
    error::AppError,
    model::giveaway::{Giveaway, GiveawayOutcome, NewAnnouncement, Reactor},
};

use super::platform::GiveawayPlatform;

#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Announce(NewAnnouncement),
    FetchReactors { channel_id: u64, message_id: u64 },
    Edit { giveaway_id: i32, outcome: GiveawayOutcome },
    Publish { giveaway_id: i32, outcome: GiveawayOutcome },
}

/// How `fetch_reactors` behaves.
#[derive(Debug, Clone)]
pub enum FetchBehavior {
    Return(Vec<Reactor>),
    Fail,
    /// Sleeps for the given time before returning nothing.
    Stall(Duration),
}

pub struct MockPlatform {
    fetch: FetchBehavior,
    fail_emission: bool,
    next_message_id: AtomicU64,
    calls: Mutex<Vec<PlatformCall>>,
}

impl MockPlatform {
    pub fn with_reactors(reactors: Vec<Reactor>) -> Self {
        Self::with_behavior(FetchBehavior::Return(reactors))
    }

    pub fn with_behavior(fetch: FetchBehavior) -> Self {
        Self {
            fetch,
            fail_emission: false,
            next_message_id: AtomicU64::new(900_000),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes `edit_message` and `publish_outcome` fail.
    pub fn failing_emission(mut self) -> Self {
        self.fail_emission = true;
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of published outcomes.
    pub fn publish_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, PlatformCall::Publish { .. }))
            .count()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure() -> AppError {
        serenity::Error::Other("platform unavailable").into()
    }
}

pub fn user(user_id: u64) -> Reactor {
    Reactor { user_id, bot: false }
}

pub fn bot(user_id: u64) -> Reactor {
    Reactor { user_id, bot: true }
}

#[async_trait]
impl GiveawayPlatform for MockPlatform {
    async fn send_announcement(&self, announcement: &NewAnnouncement) -> Result<u64, AppError> {
        self.record(PlatformCall::Announce(announcement.clone()));
        Ok(self.next_message_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn fetch_reactors(
        &self,
        channel_id: u64,
        message_id: u64,
        _emoji: &str,
    ) -> Result<Vec<Reactor>, AppError> {
        self.record(PlatformCall::FetchReactors {
            channel_id,
            message_id,
        });

        match &self.fetch {
            FetchBehavior::Return(reactors) => Ok(reactors.clone()),
            FetchBehavior::Fail => Err(Self::failure()),
            FetchBehavior::Stall(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(Vec::new())
            }
        }
    }

    async fn edit_message(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError> {
        self.record(PlatformCall::Edit {
            giveaway_id: giveaway.id,
            outcome: outcome.clone(),
        });

        if self.fail_emission {
            return Err(Self::failure());
        }
        Ok(())
    }

    async fn publish_outcome(
        &self,
        giveaway: &Giveaway,
        outcome: &GiveawayOutcome,
    ) -> Result<(), AppError> {
        self.record(PlatformCall::Publish {
            giveaway_id: giveaway.id,
            outcome: outcome.clone(),
        });

        if self.fail_emission {
            return Err(Self::failure());
        }
        Ok(())
    }
}
