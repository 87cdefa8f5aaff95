use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct BotChatDto {
    pub chat_id: i64,
    pub title: String,
    pub registered_at: DateTime<Utc>,
}
