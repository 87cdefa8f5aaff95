use super::*;

/// Tests creating a reminder for a registered chat.
///
/// Expected: Ok(Reminder) active with no delivery recorded
#[tokio::test]
async fn creates_active_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;

    let reminder = ReminderRepository::new(db)
        .create(CreateReminderParam {
            chat_id: chat.chat_id,
            text: "Dentist".to_string(),
            remind_at: at(2, 9, 0),
            recurrence: Recurrence::Weekly,
        })
        .await?;

    assert_eq!(reminder.chat_id, chat.chat_id);
    assert_eq!(reminder.text, "Dentist");
    assert_eq!(reminder.remind_at, at(2, 9, 0));
    assert_eq!(reminder.recurrence, Recurrence::Weekly);
    assert!(reminder.active);
    assert!(reminder.last_sent_at.is_none());

    Ok(())
}

/// Tests creating a reminder for a chat that was never registered.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_chat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReminderRepository::new(db)
        .create(CreateReminderParam {
            chat_id: 404,
            text: "Nobody listens".to_string(),
            remind_at: at(2, 9, 0),
            recurrence: Recurrence::Once,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
