//! Reminder domain models and parameters.
//!
//! Reminders belong to a registered chat and fire once or repeat daily or weekly. A
//! repeating reminder keeps a single row whose `remind_at` moves forward each time it
//! is delivered.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::Recurrence as RecurrenceEntity;

use crate::model::reminder::{CreateReminderDto, RecurrenceDto, ReminderDto, UpdateReminderDto};

/// How a reminder repeats after it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Once,
    Daily,
    Weekly,
}

impl Recurrence {
    /// Interval between occurrences, `None` for one-off reminders.
    pub fn period(self) -> Option<Duration> {
        match self {
            Self::Once => None,
            Self::Daily => Some(Duration::days(1)),
            Self::Weekly => Some(Duration::weeks(1)),
        }
    }

    /// Human readable label used in chat replies.
    pub fn label(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn from_entity(entity: RecurrenceEntity) -> Self {
        match entity {
            RecurrenceEntity::Once => Self::Once,
            RecurrenceEntity::Daily => Self::Daily,
            RecurrenceEntity::Weekly => Self::Weekly,
        }
    }

    pub fn into_entity(self) -> RecurrenceEntity {
        match self {
            Self::Once => RecurrenceEntity::Once,
            Self::Daily => RecurrenceEntity::Daily,
            Self::Weekly => RecurrenceEntity::Weekly,
        }
    }

    pub fn into_dto(self) -> RecurrenceDto {
        match self {
            Self::Once => RecurrenceDto::None,
            Self::Daily => RecurrenceDto::Daily,
            Self::Weekly => RecurrenceDto::Weekly,
        }
    }
}

impl From<RecurrenceDto> for Recurrence {
    fn from(dto: RecurrenceDto) -> Self {
        match dto {
            RecurrenceDto::None => Self::Once,
            RecurrenceDto::Daily => Self::Daily,
            RecurrenceDto::Weekly => Self::Weekly,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: i32,
    pub chat_id: i64,
    pub text: String,
    /// Next time the reminder fires.
    pub remind_at: DateTime<Utc>,
    pub recurrence: Recurrence,
    /// Inactive reminders are kept for history but never delivered.
    pub active: bool,
    pub last_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn into_dto(self) -> ReminderDto {
        ReminderDto {
            id: self.id,
            chat_id: self.chat_id,
            text: self.text,
            remind_at: self.remind_at,
            recurrence: self.recurrence.into_dto(),
            active: self.active,
            last_sent_at: self.last_sent_at,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::reminder::Model) -> Self {
        Self {
            id: entity.id,
            chat_id: entity.chat_id,
            text: entity.text,
            remind_at: entity.remind_at,
            recurrence: Recurrence::from_entity(entity.recurrence),
            active: entity.active,
            last_sent_at: entity.last_sent_at,
            created_at: entity.created_at,
        }
    }

    /// Next firing time strictly after `now`, skipping occurrences missed while offline.
    ///
    /// Returns `None` for one-off reminders.
    pub fn next_occurrence_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let period = self.recurrence.period()?;

        if self.remind_at > now {
            return Some(self.remind_at);
        }

        let behind = (now - self.remind_at).num_seconds();
        let steps = behind / period.num_seconds() + 1;

        Some(self.remind_at + Duration::seconds(period.num_seconds() * steps))
    }
}

/// Parameters for creating a reminder.
#[derive(Debug, Clone)]
pub struct CreateReminderParam {
    pub chat_id: i64,
    pub text: String,
    pub remind_at: DateTime<Utc>,
    pub recurrence: Recurrence,
}

impl From<CreateReminderDto> for CreateReminderParam {
    fn from(dto: CreateReminderDto) -> Self {
        Self {
            chat_id: dto.chat_id,
            text: dto.text,
            remind_at: dto.remind_at,
            recurrence: dto.recurrence.into(),
        }
    }
}

/// Parameters for a partial reminder update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateReminderParam {
    pub text: Option<String>,
    pub remind_at: Option<DateTime<Utc>>,
    pub recurrence: Option<Recurrence>,
    pub active: Option<bool>,
}

impl From<UpdateReminderDto> for UpdateReminderParam {
    fn from(dto: UpdateReminderDto) -> Self {
        Self {
            text: dto.text,
            remind_at: dto.remind_at,
            recurrence: dto.recurrence.map(Recurrence::from),
            active: dto.active,
        }
    }
}
