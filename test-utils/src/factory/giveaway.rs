//! Giveaway factory for creating test giveaway records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test giveaways with customizable fields.
///
/// Defaults to an open giveaway for one winner that ends one hour from now.
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    host_id: u64,
    prize: String,
    winners_count: i32,
    end_time: i64,
    ended: bool,
    forced_winner: Option<u64>,
    winners: Option<Vec<u64>>,
}

impl<'a> GiveawayFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: next_id(),
            channel_id: next_id(),
            message_id: next_id(),
            host_id: next_id(),
            prize: format!("Prize {}", id),
            winners_count: 1,
            end_time: Utc::now().timestamp_millis() + 60 * 60 * 1000,
            ended: false,
            forced_winner: None,
            winners: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn host_id(mut self, host_id: u64) -> Self {
        self.host_id = host_id;
        self
    }

    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    pub fn winners_count(mut self, winners_count: i32) -> Self {
        self.winners_count = winners_count;
        self
    }

    /// Sets the end time as epoch milliseconds.
    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn forced_winner(mut self, user_id: u64) -> Self {
        self.forced_winner = Some(user_id);
        self
    }

    /// Marks the giveaway as already resolved with the given winners.
    pub fn resolved_with(mut self, winners: &[u64]) -> Self {
        self.ended = true;
        self.winners = Some(winners.to_vec());
        self
    }

    /// Builds and inserts the giveaway entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::giveaway::Model)` - Created giveaway entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        let winners = self
            .winners
            .map(|ids| {
                let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                serde_json::to_string(&ids)
            })
            .transpose()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::giveaway::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id as i64),
            channel_id: ActiveValue::Set(self.channel_id as i64),
            message_id: ActiveValue::Set(self.message_id as i64),
            host_id: ActiveValue::Set(self.host_id as i64),
            prize: ActiveValue::Set(self.prize),
            winners_count: ActiveValue::Set(self.winners_count),
            end_time: ActiveValue::Set(self.end_time),
            ended: ActiveValue::Set(self.ended),
            forced_winner: ActiveValue::Set(self.forced_winner.map(|id| id as i64)),
            winners: ActiveValue::Set(winners),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open giveaway with default values.
pub async fn create_giveaway(db: &DatabaseConnection) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_open_giveaway_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Giveaway).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let giveaway = create_giveaway(db).await?;

        assert!(!giveaway.ended);
        assert_eq!(giveaway.winners_count, 1);
        assert!(giveaway.forced_winner.is_none());
        assert!(giveaway.winners.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_resolved_giveaway_with_winner_list() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Giveaway).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let giveaway = GiveawayFactory::new(db)
            .resolved_with(&[11, 22])
            .build()
            .await?;

        assert!(giveaway.ended);
        assert_eq!(giveaway.winners.as_deref(), Some(r#"["11","22"]"#));

        Ok(())
    }
}
