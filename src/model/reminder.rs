use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceDto {
    #[default]
    None,
    Daily,
    Weekly,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ReminderDto {
    pub id: i32,
    pub chat_id: i64,
    pub text: String,
    pub remind_at: DateTime<Utc>,
    pub recurrence: RecurrenceDto,
    pub active: bool,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateReminderDto {
    pub chat_id: i64,
    pub text: String,
    pub remind_at: DateTime<Utc>,
    #[serde(default)]
    pub recurrence: RecurrenceDto,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateReminderDto {
    pub text: Option<String>,
    pub remind_at: Option<DateTime<Utc>>,
    pub recurrence: Option<RecurrenceDto>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReminderQueryDto {
    /// Only return reminders of this chat.
    pub chat_id: Option<i64>,
}
