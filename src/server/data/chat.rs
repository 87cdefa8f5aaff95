//! Registered bot chat repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::chat::{BotChat, UpsertChatParam};

/// Repository providing database operations for chats registered with the bot.
pub struct BotChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a chat or refreshes the title of an already registered one.
    ///
    /// The original registration time is kept when the chat already exists.
    ///
    /// # Returns
    /// - `Ok(BotChat)` - The registered chat
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertChatParam) -> Result<BotChat, DbErr> {
        let existing = entity::prelude::BotChat::find_by_id(param.chat_id)
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::bot_chat::ActiveModel = existing.into();
                active.title = ActiveValue::Set(param.title);
                active.update(self.db).await?
            }
            None => {
                entity::bot_chat::ActiveModel {
                    chat_id: ActiveValue::Set(param.chat_id),
                    title: ActiveValue::Set(param.title),
                    registered_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(BotChat::from_entity(entity))
    }

    pub async fn find_by_chat_id(&self, chat_id: i64) -> Result<Option<BotChat>, DbErr> {
        let entity = entity::prelude::BotChat::find_by_id(chat_id)
            .one(self.db)
            .await?;

        Ok(entity.map(BotChat::from_entity))
    }

    /// Gets all registered chats, oldest registration first.
    pub async fn get_all(&self) -> Result<Vec<BotChat>, DbErr> {
        let entities = entity::prelude::BotChat::find()
            .order_by_asc(entity::bot_chat::Column::RegisteredAt)
            .order_by_asc(entity::bot_chat::Column::ChatId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BotChat::from_entity).collect())
    }
}
