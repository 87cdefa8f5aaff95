use sea_orm::DatabaseConnection;

use crate::server::{
    data::chat::BotChatRepository,
    error::AppError,
    model::chat::{BotChat, UpsertChatParam},
};

/// Service for chats registered with the bot.
pub struct BotChatService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BotChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a chat, or refreshes its title if it is already known.
    pub async fn register(&self, param: UpsertChatParam) -> Result<BotChat, AppError> {
        Ok(BotChatRepository::new(self.db).upsert(param).await?)
    }

    pub async fn is_registered(&self, chat_id: i64) -> Result<bool, AppError> {
        let chat = BotChatRepository::new(self.db)
            .find_by_chat_id(chat_id)
            .await?;

        Ok(chat.is_some())
    }

    pub async fn get_all(&self) -> Result<Vec<BotChat>, AppError> {
        Ok(BotChatRepository::new(self.db).get_all().await?)
    }
}
