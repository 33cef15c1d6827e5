//! Giveaway timers.
//!
//! Each open giveaway gets a one-shot job firing at its end time. The end time is
//! durable, so on startup every open giveaway is re-armed, or resolved immediately if
//! it came due while the bot was offline. A per-minute sweep catches any giveaway whose
//! timer was lost. Resolution is idempotent, so a timer and the sweep firing for the
//! same giveaway is harmless.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::{Giveaway, Resolution},
    service::giveaway::{create::StartGiveaway, platform::GiveawayPlatform, GiveawayService},
};

/// Everything a timer job needs to resolve a giveaway.
#[derive(Clone)]
struct Resolver {
    db: DatabaseConnection,
    platform: Arc<dyn GiveawayPlatform>,
    reaction_timeout: Duration,
}

impl Resolver {
    fn service(&self) -> GiveawayService<'_> {
        GiveawayService::new(&self.db, self.platform.as_ref(), self.reaction_timeout)
    }

    async fn resolve(&self, id: i32) -> Result<Option<Resolution>, AppError> {
        self.service().resolve(id).await
    }

    /// Resolves every open giveaway whose end time has passed.
    ///
    /// Each giveaway resolves on its own task, so a stalled reaction fetch only delays
    /// its own giveaway. Returns once all of them have finished.
    async fn sweep(&self, now_ms: i64) -> Result<usize, AppError> {
        let due = GiveawayRepository::new(&self.db).list_due(now_ms).await?;

        let handles: Vec<_> = due
            .into_iter()
            .map(|giveaway| {
                let resolver = self.clone();
                let id = giveaway.id;
                (id, tokio::spawn(async move { resolver.resolve(id).await }))
            })
            .collect();

        let mut resolved = 0;
        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(Some(resolution))) if resolution.newly_resolved => resolved += 1,
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::error!("Error resolving giveaway {}: {}", id, e),
                Err(e) => tracing::error!("Resolution task for giveaway {} failed: {}", id, e),
            }
        }

        Ok(resolved)
    }

    /// Resolves on a separate task so one slow resolution never blocks another.
    fn spawn_resolve(&self, id: i32) {
        let resolver = self.clone();

        tokio::spawn(async move {
            if let Err(e) = resolver.resolve(id).await {
                tracing::error!("Error resolving giveaway {}: {}", id, e);
            }
        });
    }
}

/// Owns the cron scheduler and arms one timer per open giveaway.
#[derive(Clone)]
pub struct GiveawayScheduler {
    scheduler: JobScheduler,
    resolver: Resolver,
}

impl GiveawayScheduler {
    /// Creates the scheduler without starting it.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `platform` - Chat collaborator used at resolution time
    /// - `reaction_timeout` - Bound on fetching reactions
    pub async fn new(
        db: DatabaseConnection,
        platform: Arc<dyn GiveawayPlatform>,
        reaction_timeout: Duration,
    ) -> Result<Self, AppError> {
        Ok(Self {
            scheduler: JobScheduler::new().await?,
            resolver: Resolver {
                db,
                platform,
                reaction_timeout,
            },
        })
    }

    /// Starts the catch-up sweep and re-arms every open giveaway.
    ///
    /// The sweep runs every minute and resolves open giveaways that are past due.
    pub async fn start(&self) -> Result<(), AppError> {
        let sweep_resolver = self.resolver.clone();

        let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
            let resolver = sweep_resolver.clone();

            Box::pin(async move {
                match resolver.sweep(Utc::now().timestamp_millis()).await {
                    Ok(0) => {}
                    Ok(count) => tracing::info!("Sweep resolved {} overdue giveaway(s)", count),
                    Err(e) => tracing::error!("Error sweeping giveaways: {}", e),
                }
            })
        })?;

        self.scheduler.add(job).await?;
        self.scheduler.start().await?;

        let armed = self.reconcile(Utc::now().timestamp_millis()).await?;

        tracing::info!("Giveaway scheduler started, {} open giveaway(s) armed", armed);

        Ok(())
    }

    /// Arms every open giveaway, resolving overdue ones immediately.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of open giveaways handled
    pub async fn reconcile(&self, now_ms: i64) -> Result<usize, AppError> {
        let open = GiveawayRepository::new(&self.resolver.db).list_open().await?;
        let count = open.len();

        for giveaway in open {
            self.arm(&giveaway, now_ms).await?;
        }

        Ok(count)
    }

    /// Announces, persists and arms a new giveaway.
    pub async fn create(&self, request: StartGiveaway, now_ms: i64) -> Result<Giveaway, AppError> {
        let giveaway = self.resolver.service().create(request, now_ms).await?;
        self.arm(&giveaway, now_ms).await?;

        Ok(giveaway)
    }

    /// Stores a forced winner on the open giveaway announced by `message_id`.
    pub async fn force_winner_by_message(
        &self,
        guild_id: u64,
        message_id: u64,
        user_id: u64,
    ) -> Result<Giveaway, AppError> {
        self.resolver
            .service()
            .force_winner_by_message(guild_id, message_id, user_id)
            .await
    }

    /// Resolves every overdue giveaway now and waits for all of them.
    pub async fn sweep(&self, now_ms: i64) -> Result<usize, AppError> {
        self.resolver.sweep(now_ms).await
    }

    /// Schedules a one-shot job at the giveaway's end time, or resolves it right away.
    async fn arm(&self, giveaway: &Giveaway, now_ms: i64) -> Result<(), AppError> {
        let id = giveaway.id;

        if giveaway.is_due(now_ms) {
            tracing::debug!("Giveaway {} is overdue, resolving now", id);
            self.resolver.spawn_resolve(id);
            return Ok(());
        }

        let delay = Duration::from_millis((giveaway.end_time - now_ms) as u64);
        let resolver = self.resolver.clone();

        let job = Job::new_one_shot_async(delay, move |_uuid, _lock| {
            let resolver = resolver.clone();

            Box::pin(async move {
                if let Err(e) = resolver.resolve(id).await {
                    tracing::error!("Error resolving giveaway {}: {}", id, e);
                }
            })
        })?;

        self.scheduler.add(job).await?;

        tracing::debug!("Giveaway {} armed to fire in {:?}", id, delay);

        Ok(())
    }

    /// Stops every pending timer. Open giveaways are re-armed on the next start.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}
