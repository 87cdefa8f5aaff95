//! Reminder service for business logic.
//!
//! Shared by the HTTP controllers, the bot command handlers and the delivery scheduler.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::reminder::ReminderRepository,
    error::AppError,
    model::reminder::{CreateReminderParam, Reminder, UpdateReminderParam},
    service::chat::BotChatService,
};

pub struct ReminderService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reminder for a registered chat.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The created reminder
    /// - `Err(AppError::BadRequest)` - Reminder text is blank
    /// - `Err(AppError::NotFound)` - Chat has not registered with the bot
    pub async fn create(&self, param: CreateReminderParam) -> Result<Reminder, AppError> {
        let text = validate_text(&param.text)?;

        if !BotChatService::new(self.db)
            .is_registered(param.chat_id)
            .await?
        {
            return Err(AppError::NotFound("Chat not registered".to_string()));
        }

        let reminder = ReminderRepository::new(self.db)
            .create(CreateReminderParam { text, ..param })
            .await?;

        Ok(reminder)
    }

    pub async fn get_all(&self, chat_id: Option<i64>) -> Result<Vec<Reminder>, AppError> {
        Ok(ReminderRepository::new(self.db).get_all(chat_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Reminder, AppError> {
        ReminderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(reminder_not_found)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The updated reminder
    /// - `Err(AppError::BadRequest)` - New text is blank
    /// - `Err(AppError::NotFound)` - No reminder with that id
    pub async fn update(&self, id: i32, param: UpdateReminderParam) -> Result<Reminder, AppError> {
        let param = UpdateReminderParam {
            text: param.text.as_deref().map(validate_text).transpose()?,
            ..param
        };

        ReminderRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(reminder_not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ReminderRepository::new(self.db).delete(id).await? {
            Ok(())
        } else {
            Err(reminder_not_found())
        }
    }

    /// Active reminders of a chat, soonest first.
    pub async fn list_active_for_chat(&self, chat_id: i64) -> Result<Vec<Reminder>, AppError> {
        Ok(ReminderRepository::new(self.db)
            .get_active_by_chat(chat_id)
            .await?)
    }

    /// Deletes a reminder on behalf of a chat.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No such reminder in this chat
    pub async fn delete_for_chat(&self, id: i32, chat_id: i64) -> Result<bool, AppError> {
        Ok(ReminderRepository::new(self.db)
            .delete_for_chat(id, chat_id)
            .await?)
    }

    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>, AppError> {
        Ok(ReminderRepository::new(self.db).get_due(now).await?)
    }

    /// Records delivery of a reminder at `now`.
    ///
    /// One-off reminders are deactivated. Repeating reminders move to their next
    /// occurrence after `now`, skipping any missed while the bot was offline.
    pub async fn mark_delivered(
        &self,
        reminder: &Reminder,
        now: DateTime<Utc>,
    ) -> Result<Option<Reminder>, AppError> {
        let next = reminder.next_occurrence_after(now);

        Ok(ReminderRepository::new(self.db)
            .record_delivery(reminder.id, now, next)
            .await?)
    }
}

fn reminder_not_found() -> AppError {
    AppError::NotFound("Reminder not found".to_string())
}

fn validate_text(text: &str) -> Result<String, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest(
            "Reminder text must not be empty".to_string(),
        ));
    }

    Ok(text.to_string())
}
