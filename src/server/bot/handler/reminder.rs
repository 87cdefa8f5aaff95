use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    bot::command::When,
    error::AppError,
    model::reminder::{CreateReminderParam, Recurrence},
    service::reminder::ReminderService,
    util::parse::{format_local, local_to_utc, next_time_of_day},
};

pub async fn handle_remind(
    db: &DatabaseConnection,
    utc_offset: FixedOffset,
    chat_id: i64,
    when: When,
    text: String,
    recurrence: Recurrence,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let remind_at = match when {
        When::TimeOfDay(time) => next_time_of_day(time, now, utc_offset),
        When::At(local) => local_to_utc(local, utc_offset),
    };

    let Some(remind_at) = remind_at else {
        return Ok("That time does not exist in the configured timezone.".to_string());
    };
    if remind_at <= now {
        return Ok("That time is in the past.".to_string());
    }

    let reminder = ReminderService::new(db)
        .create(CreateReminderParam {
            chat_id,
            text,
            remind_at,
            recurrence,
        })
        .await?;

    let at = format_local(reminder.remind_at, utc_offset);
    Ok(match recurrence {
        Recurrence::Once => format!("Reminder #{} set for {}.", reminder.id, at),
        _ => format!(
            "Reminder #{} set for {}, repeating {}.",
            reminder.id,
            at,
            recurrence.label()
        ),
    })
}

pub async fn handle_list(
    db: &DatabaseConnection,
    utc_offset: FixedOffset,
    chat_id: i64,
) -> Result<String, AppError> {
    let reminders = ReminderService::new(db)
        .list_active_for_chat(chat_id)
        .await?;

    if reminders.is_empty() {
        return Ok("No active reminders.".to_string());
    }

    let lines: Vec<String> = reminders
        .iter()
        .map(|reminder| {
            let mut line = format!(
                "#{} {} {}",
                reminder.id,
                format_local(reminder.remind_at, utc_offset),
                reminder.text
            );
            if reminder.recurrence != Recurrence::Once {
                line.push_str(&format!(" ({})", reminder.recurrence.label()));
            }
            line
        })
        .collect();

    Ok(lines.join("\n"))
}

pub async fn handle_delete(
    db: &DatabaseConnection,
    chat_id: i64,
    id: i32,
) -> Result<String, AppError> {
    if ReminderService::new(db).delete_for_chat(id, chat_id).await? {
        Ok(format!("Reminder #{} deleted.", id))
    } else {
        Ok(format!("No reminder #{} in this chat.", id))
    }
}
