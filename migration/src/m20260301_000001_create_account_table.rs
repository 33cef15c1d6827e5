use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(big_integer(Account::UserId))
                    .col(big_integer(Account::GuildId))
                    .col(big_integer(Account::Balance).default(0))
                    .col(big_integer(Account::Bank).default(0))
                    .col(big_integer(Account::LastDaily).default(0))
                    .col(big_integer(Account::LastWork).default(0))
                    .col(big_integer(Account::LastCrime).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_account")
                            .col(Account::UserId)
                            .col(Account::GuildId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_guild_id")
                    .table(Account::Table)
                    .col(Account::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    UserId,
    GuildId,
    Balance,
    Bank,
    LastDaily,
    LastWork,
    LastCrime,
}
