use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000002_create_bot_chat_table::BotChat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(pk_auto(Reminder::Id))
                    .col(big_integer(Reminder::ChatId))
                    .col(text(Reminder::Text))
                    .col(timestamp(Reminder::RemindAt))
                    .col(string_len(Reminder::Recurrence, 16).default("none"))
                    .col(boolean(Reminder::Active).default(true))
                    .col(timestamp_null(Reminder::LastSentAt))
                    .col(
                        timestamp(Reminder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_chat_id")
                            .from(Reminder::Table, Reminder::ChatId)
                            .to(BotChat::Table, BotChat::ChatId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reminder_due")
                    .table(Reminder::Table)
                    .col(Reminder::Active)
                    .col(Reminder::RemindAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reminder {
    Table,
    Id,
    ChatId,
    Text,
    RemindAt,
    Recurrence,
    Active,
    LastSentAt,
    CreatedAt,
}
