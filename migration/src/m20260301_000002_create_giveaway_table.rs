use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(big_integer(Giveaway::GuildId))
                    .col(big_integer(Giveaway::ChannelId))
                    .col(big_integer(Giveaway::MessageId))
                    .col(big_integer(Giveaway::HostId))
                    .col(text(Giveaway::Prize))
                    .col(integer(Giveaway::WinnersCount).default(1))
                    .col(big_integer(Giveaway::EndTime))
                    .col(boolean(Giveaway::Ended).default(false))
                    .col(big_integer_null(Giveaway::ForcedWinner))
                    .col(text_null(Giveaway::Winners))
                    .col(
                        timestamp(Giveaway::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Startup reconciliation scans open giveaways by end time
        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_ended_end_time")
                    .table(Giveaway::Table)
                    .col(Giveaway::Ended)
                    .col(Giveaway::EndTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_message_id")
                    .table(Giveaway::Table)
                    .col(Giveaway::MessageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    HostId,
    Prize,
    WinnersCount,
    EndTime,
    Ended,
    ForcedWinner,
    Winners,
    CreatedAt,
}
