//! Reminder data repository for database operations.
//!
//! Handles creation, queries, partial updates and delivery bookkeeping for reminders.
//! Callers are expected to have verified that the owning chat is registered; the
//! foreign key rejects inserts for unknown chats.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reminder::{CreateReminderParam, Reminder, UpdateReminderParam};

/// Repository providing database operations for reminders.
pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active reminder.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The created reminder
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown chats
    pub async fn create(&self, param: CreateReminderParam) -> Result<Reminder, DbErr> {
        let entity = entity::reminder::ActiveModel {
            chat_id: ActiveValue::Set(param.chat_id),
            text: ActiveValue::Set(param.text),
            remind_at: ActiveValue::Set(param.remind_at),
            recurrence: ActiveValue::Set(param.recurrence.into_entity()),
            active: ActiveValue::Set(true),
            last_sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reminder::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reminder>, DbErr> {
        let entity = entity::prelude::Reminder::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Reminder::from_entity))
    }

    /// Gets reminders ordered by their next firing time, optionally limited to one chat.
    ///
    /// Inactive reminders are included.
    pub async fn get_all(&self, chat_id: Option<i64>) -> Result<Vec<Reminder>, DbErr> {
        let mut query = entity::prelude::Reminder::find();
        if let Some(chat_id) = chat_id {
            query = query.filter(entity::reminder::Column::ChatId.eq(chat_id));
        }

        let entities = query
            .order_by_asc(entity::reminder::Column::RemindAt)
            .order_by_asc(entity::reminder::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reminder::from_entity).collect())
    }

    /// Gets the active reminders of a chat ordered by next firing time.
    pub async fn get_active_by_chat(&self, chat_id: i64) -> Result<Vec<Reminder>, DbErr> {
        let entities = entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::ChatId.eq(chat_id))
            .filter(entity::reminder::Column::Active.eq(true))
            .order_by_asc(entity::reminder::Column::RemindAt)
            .order_by_asc(entity::reminder::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reminder::from_entity).collect())
    }

    /// Gets all active reminders whose firing time is at or before `now`.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>, DbErr> {
        let entities = entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::Active.eq(true))
            .filter(entity::reminder::Column::RemindAt.lte(now))
            .order_by_asc(entity::reminder::Column::RemindAt)
            .order_by_asc(entity::reminder::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reminder::from_entity).collect())
    }

    /// Applies a partial update to a reminder.
    ///
    /// # Returns
    /// - `Ok(Some(Reminder))` - The updated reminder
    /// - `Ok(None)` - No reminder with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpdateReminderParam,
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(existing) = entity::prelude::Reminder::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reminder::ActiveModel = existing.into();
        if let Some(text) = param.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(remind_at) = param.remind_at {
            active.remind_at = ActiveValue::Set(remind_at);
        }
        if let Some(recurrence) = param.recurrence {
            active.recurrence = ActiveValue::Set(recurrence.into_entity());
        }
        if let Some(is_active) = param.active {
            active.active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Reminder::from_entity(entity)))
    }

    /// Records that a reminder was delivered.
    ///
    /// Sets `last_sent_at`. When `next_remind_at` is given the reminder stays active and
    /// moves to that time; otherwise it is deactivated.
    ///
    /// # Returns
    /// - `Ok(Some(Reminder))` - The updated reminder
    /// - `Ok(None)` - The reminder was deleted in the meantime
    pub async fn record_delivery(
        &self,
        id: i32,
        sent_at: DateTime<Utc>,
        next_remind_at: Option<DateTime<Utc>>,
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(existing) = entity::prelude::Reminder::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reminder::ActiveModel = existing.into();
        active.last_sent_at = ActiveValue::Set(Some(sent_at));
        match next_remind_at {
            Some(next) => active.remind_at = ActiveValue::Set(next),
            None => active.active = ActiveValue::Set(false),
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Reminder::from_entity(entity)))
    }

    /// Deletes a reminder by id.
    ///
    /// # Returns
    /// - `Ok(true)` - Reminder deleted
    /// - `Ok(false)` - No reminder with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Reminder::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        existing.delete(self.db).await?;

        Ok(true)
    }

    /// Deletes a reminder only if it belongs to the given chat.
    ///
    /// # Returns
    /// - `Ok(true)` - Reminder deleted
    /// - `Ok(false)` - No reminder with that id in this chat
    pub async fn delete_for_chat(&self, id: i32, chat_id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Reminder::delete_many()
            .filter(entity::reminder::Column::Id.eq(id))
            .filter(entity::reminder::Column::ChatId.eq(chat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
