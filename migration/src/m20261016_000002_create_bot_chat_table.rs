use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotChat::Table)
                    .if_not_exists()
                    .col(big_integer(BotChat::ChatId).primary_key())
                    .col(string(BotChat::Title))
                    .col(
                        timestamp(BotChat::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotChat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotChat {
    Table,
    ChatId,
    Title,
    RegisteredAt,
}
