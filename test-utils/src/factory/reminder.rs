//! Reminder factory for creating test reminder entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::Recurrence;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reminders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reminder = ReminderFactory::new(&db, chat.chat_id)
///     .remind_at(Utc::now() - chrono::Duration::minutes(5))
///     .recurrence(Recurrence::Daily)
///     .build()
///     .await?;
/// ```
pub struct ReminderFactory<'a> {
    db: &'a DatabaseConnection,
    chat_id: i64,
    text: String,
    remind_at: chrono::DateTime<Utc>,
    recurrence: Recurrence,
    active: bool,
    last_sent_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> ReminderFactory<'a> {
    /// Creates a new ReminderFactory with default values.
    ///
    /// Defaults:
    /// - text: `"Reminder {id}"`
    /// - remind_at: 1 hour from now
    /// - recurrence: `Recurrence::Once`
    /// - active: `true`
    /// - last_sent_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `chat_id` - Registered chat the reminder belongs to
    pub fn new(db: &'a DatabaseConnection, chat_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            chat_id,
            text: format!("Reminder {}", id),
            remind_at: Utc::now() + chrono::Duration::hours(1),
            recurrence: Recurrence::Once,
            active: true,
            last_sent_at: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn remind_at(mut self, remind_at: chrono::DateTime<Utc>) -> Self {
        self.remind_at = remind_at;
        self
    }

    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn last_sent_at(mut self, last_sent_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.last_sent_at = last_sent_at;
        self
    }

    /// Builds and inserts the reminder entity into the database.
    pub async fn build(self) -> Result<entity::reminder::Model, DbErr> {
        entity::reminder::ActiveModel {
            chat_id: ActiveValue::Set(self.chat_id),
            text: ActiveValue::Set(self.text),
            remind_at: ActiveValue::Set(self.remind_at),
            recurrence: ActiveValue::Set(self.recurrence),
            active: ActiveValue::Set(self.active),
            last_sent_at: ActiveValue::Set(self.last_sent_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reminder with default values for the given chat.
pub async fn create_reminder(
    db: &DatabaseConnection,
    chat_id: i64,
) -> Result<entity::reminder::Model, DbErr> {
    ReminderFactory::new(db, chat_id).build().await
}
