//! Giveaway data repository
//!
//! Provides the `GiveawayRepository` for persisting giveaways and for the exactly-once
//! `ended` transition. Every state-changing write is conditional on `ended = false`,
//! so only one caller can ever resolve or override a given giveaway. Closing with
//! drawn winners is further conditional on no forced winner being present.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::{giveaway::GiveawayError, AppError},
    model::giveaway::{CreateGiveawayParam, Giveaway},
};

/// Repository providing database operations for giveaways.
pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    /// Creates a new GiveawayRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new open giveaway
    ///
    /// # Arguments
    /// - `param` - Announcement location, prize and fixed end time
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - The created giveaway
    /// - `Err(AppError::GiveawayErr(InvalidWinnerCount))` - Winner count above `i32::MAX`
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, AppError> {
        let winners_count =
            i32::try_from(param.winners_count).map_err(|_| GiveawayError::InvalidWinnerCount)?;

        let entity = entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id as i64),
            channel_id: ActiveValue::Set(param.channel_id as i64),
            message_id: ActiveValue::Set(param.message_id as i64),
            host_id: ActiveValue::Set(param.host_id as i64),
            prize: ActiveValue::Set(param.prize),
            winners_count: ActiveValue::Set(winners_count),
            end_time: ActiveValue::Set(param.end_time),
            ended: ActiveValue::Set(false),
            forced_winner: ActiveValue::Set(None),
            winners: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Giveaway::from_entity(entity)
    }

    /// Finds a giveaway by id regardless of state
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - The giveaway exists
    /// - `Ok(None)` - No giveaway with that id
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Giveaway>, AppError> {
        entity::prelude::Giveaway::find_by_id(id)
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Finds the open giveaway announced by `message_id` within a guild
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - An open giveaway uses that announcement
    /// - `Ok(None)` - Unknown message or the giveaway already ended
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn find_open_by_message_id(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<Giveaway>, AppError> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::GuildId.eq(guild_id as i64))
            .filter(entity::giveaway::Column::MessageId.eq(message_id as i64))
            .filter(entity::giveaway::Column::Ended.eq(false))
            .one(self.db)
            .await?
            .map(Giveaway::from_entity)
            .transpose()
    }

    /// Lists every open giveaway ordered by end time, soonest first
    pub async fn list_open(&self) -> Result<Vec<Giveaway>, AppError> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Ended.eq(false))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Giveaway::from_entity)
            .collect()
    }

    /// Lists open giveaways whose end time is at or before `now_ms`
    pub async fn list_due(&self, now_ms: i64) -> Result<Vec<Giveaway>, AppError> {
        entity::prelude::Giveaway::find()
            .filter(entity::giveaway::Column::Ended.eq(false))
            .filter(entity::giveaway::Column::EndTime.lte(now_ms))
            .order_by_asc(entity::giveaway::Column::EndTime)
            .all(self.db)
            .await?
            .into_iter()
            .map(Giveaway::from_entity)
            .collect()
    }

    /// Flips `ended` to true and records the winners in one conditional update
    ///
    /// # Arguments
    /// - `id` - Giveaway to close
    /// - `winners` - Drawn winners, stored as a JSON list of id strings
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - Giveaway missing or already ended
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_ended(&self, id: i32, winners: &[u64]) -> Result<bool, AppError> {
        self.close(id, winners, false).await
    }

    /// Closes a giveaway with drawn winners unless an override was set meanwhile
    ///
    /// # Returns
    /// - `Ok(true)` - This call performed the transition
    /// - `Ok(false)` - Giveaway missing, already ended or carrying a forced winner
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_drawn(&self, id: i32, winners: &[u64]) -> Result<bool, AppError> {
        self.close(id, winners, true).await
    }

    async fn close(
        &self,
        id: i32,
        winners: &[u64],
        without_override: bool,
    ) -> Result<bool, AppError> {
        let ids: Vec<String> = winners.iter().map(|id| id.to_string()).collect();
        // A Vec<String> always serializes
        let winners_json = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());

        let mut update = entity::prelude::Giveaway::update_many()
            .col_expr(entity::giveaway::Column::Ended, Expr::value(true))
            .col_expr(entity::giveaway::Column::Winners, Expr::value(winners_json))
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::Ended.eq(false));

        if without_override {
            update = update.filter(entity::giveaway::Column::ForcedWinner.is_null());
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Sets the override winner of an open giveaway
    ///
    /// # Returns
    /// - `Ok(true)` - Override stored
    /// - `Ok(false)` - Giveaway missing or already ended
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_forced_winner(&self, id: i32, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Giveaway::update_many()
            .col_expr(
                entity::giveaway::Column::ForcedWinner,
                Expr::value(user_id as i64),
            )
            .filter(entity::giveaway::Column::Id.eq(id))
            .filter(entity::giveaway::Column::Ended.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
