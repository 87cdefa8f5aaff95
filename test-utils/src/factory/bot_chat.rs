//! Bot chat factory for creating registered Telegram chats.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating registered bot chats.
pub struct BotChatFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i64,
    title: String,
    registered_at: chrono::DateTime<Utc>,
}

impl<'a> BotChatFactory<'a> {
    /// Creates a new BotChatFactory with default values.
    ///
    /// Defaults:
    /// - chat_id: auto-incremented counter value
    /// - title: `"Chat {id}"`
    /// - registered_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            chat_id: id as i64,
            title: format!("Chat {}", id),
            registered_at: Utc::now(),
        }
    }

    pub fn chat_id(mut self, chat_id: i64) -> Self {
        self.chat_id = chat_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn registered_at(mut self, registered_at: chrono::DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Builds and inserts the chat entity into the database.
    pub async fn build(self) -> Result<entity::bot_chat::Model, DbErr> {
        entity::bot_chat::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            title: ActiveValue::Set(self.title),
            registered_at: ActiveValue::Set(self.registered_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a chat with default values.
pub async fn create_chat(db: &DatabaseConnection) -> Result<entity::bot_chat::Model, DbErr> {
    BotChatFactory::new(db).build().await
}
