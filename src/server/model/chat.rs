//! Registered bot chat domain models.

use chrono::{DateTime, Utc};

use crate::model::chat::BotChatDto;

/// A Telegram chat that registered with the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct BotChat {
    pub chat_id: i64,
    /// Username, first name or group title, whichever Telegram provided.
    pub title: String,
    pub registered_at: DateTime<Utc>,
}

impl BotChat {
    pub fn into_dto(self) -> BotChatDto {
        BotChatDto {
            chat_id: self.chat_id,
            title: self.title,
            registered_at: self.registered_at,
        }
    }

    pub fn from_entity(entity: entity::bot_chat::Model) -> Self {
        Self {
            chat_id: entity.chat_id,
            title: entity.title,
            registered_at: entity.registered_at,
        }
    }
}

/// Parameters for registering a chat or refreshing its title.
#[derive(Debug, Clone)]
pub struct UpsertChatParam {
    pub chat_id: i64,
    pub title: String,
}
