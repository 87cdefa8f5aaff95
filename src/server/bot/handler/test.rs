use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use super::handle_message;
use crate::server::{
    bot::types::Chat,
    model::reminder::Recurrence,
    service::{chat::BotChatService, reminder::ReminderService},
};

fn chat(id: i64) -> Chat {
    Chat {
        id,
        title: None,
        username: Some("mama".to_string()),
        first_name: Some("Anna".to_string()),
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

async fn send(db: &DatabaseConnection, chat_id: i64, text: &str) -> String {
    handle_message(db, utc(), &chat(chat_id), text, now()).await
}

/// Tests that `/start` registers the chat under its display title.
///
/// Expected: chat stored with title "@mama" and greeting mentions the commands
#[tokio::test]
async fn start_registers_chat() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reply = send(db, -100500, "/start").await;

    assert!(reply.starts_with("Hi @mama!"));
    assert!(reply.contains("/remind"));
    let chats = BotChatService::new(db).get_all().await.unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].chat_id, -100500);
    assert_eq!(chats[0].title, "@mama");
}

/// Tests that reminder commands from an unregistered chat are refused.
///
/// Expected: hint to send /start, nothing stored
#[tokio::test]
async fn unregistered_chat_is_asked_to_start() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reply = send(db, -100501, "/remind 18:00 Dinner").await;

    assert!(reply.contains("/start"));
    assert!(ReminderService::new(db).get_all(None).await.unwrap().is_empty());
}

/// Tests that help works without registration.
#[tokio::test]
async fn help_does_not_require_registration() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reply = send(db, -100502, "/help").await;

    assert!(reply.starts_with("Commands:"));
}

/// Tests creating a one-off reminder for a time later today.
///
/// Expected: reminder stored for 18:00 UTC on the same day
#[tokio::test]
async fn remind_time_of_day_creates_reminder() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::bot_chat::BotChatFactory::new(db)
        .chat_id(-100503)
        .build()
        .await
        .unwrap();

    let reply = send(db, -100503, "/remind 18:00 Dinner").await;

    let reminders = ReminderService::new(db).get_all(Some(-100503)).await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].text, "Dinner");
    assert_eq!(
        reminders[0].remind_at,
        Utc.with_ymd_and_hms(2026, 3, 2, 18, 0, 0).unwrap()
    );
    assert_eq!(reminders[0].recurrence, Recurrence::Once);
    assert_eq!(
        reply,
        format!("Reminder #{} set for 02.03.2026 18:00.", reminders[0].id)
    );
}

/// Tests that `/daily` stores a repeating reminder.
#[tokio::test]
async fn daily_creates_repeating_reminder() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::bot_chat::BotChatFactory::new(db)
        .chat_id(-100504)
        .build()
        .await
        .unwrap();

    let reply = send(db, -100504, "/daily 08:00 Vitamins").await;

    let reminders = ReminderService::new(db).get_all(Some(-100504)).await.unwrap();
    assert_eq!(reminders[0].recurrence, Recurrence::Daily);
    // 08:00 already passed at 09:00, so the first occurrence is tomorrow
    assert_eq!(
        reminders[0].remind_at,
        Utc.with_ymd_and_hms(2026, 3, 3, 8, 0, 0).unwrap()
    );
    assert!(reply.ends_with("repeating daily."));
}

/// Tests that absolute dates in the past are rejected.
///
/// Expected: "in the past" reply, nothing stored
#[tokio::test]
async fn past_date_is_rejected() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::bot_chat::BotChatFactory::new(db)
        .chat_id(-100505)
        .build()
        .await
        .unwrap();

    let reply = send(db, -100505, "/remind 01.03.2026 10:00 Too late").await;

    assert_eq!(reply, "That time is in the past.");
    assert!(ReminderService::new(db).get_all(None).await.unwrap().is_empty());
}

/// Tests listing and deleting reminders of a chat.
///
/// Expected: list shows the reminder, delete removes it, second delete reports missing
#[tokio::test]
async fn list_and_delete() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::bot_chat::BotChatFactory::new(db)
        .chat_id(-100506)
        .build()
        .await
        .unwrap();

    assert_eq!(send(db, -100506, "/list").await, "No active reminders.");

    send(db, -100506, "/weekly 2026-03-07 10:00 Trash out").await;
    let id = ReminderService::new(db).get_all(Some(-100506)).await.unwrap()[0].id;

    assert_eq!(
        send(db, -100506, "/list").await,
        format!("#{} 07.03.2026 10:00 Trash out (weekly)", id)
    );
    assert_eq!(
        send(db, -100506, &format!("/delete {}", id)).await,
        format!("Reminder #{} deleted.", id)
    );
    assert_eq!(
        send(db, -100506, &format!("/delete {}", id)).await,
        format!("No reminder #{} in this chat.", id)
    );
}

/// Tests that a chat cannot delete another chat's reminder.
#[tokio::test]
async fn delete_is_scoped_to_chat() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, reminder) = factory::helpers::create_reminder_with_chat(db).await.unwrap();
    factory::bot_chat::BotChatFactory::new(db)
        .chat_id(-100507)
        .build()
        .await
        .unwrap();

    let reply = send(db, -100507, &format!("/delete {}", reminder.id)).await;

    assert_eq!(reply, format!("No reminder #{} in this chat.", reminder.id));
    assert!(ReminderService::new(db).get(reminder.id).await.is_ok());
}

/// Tests replies to plain text, unknown commands and malformed arguments.
#[tokio::test]
async fn unknown_input_gets_hint() {
    let test = TestBuilder::new().with_reminder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(send(db, -100508, "hello there").await.contains("/help"));
    assert!(send(db, -100508, "/dance").await.starts_with("Unknown command /dance"));
    assert_eq!(
        send(db, -100508, "/remind soon Something").await,
        "Usage: /remind <when> <text>"
    );
}
