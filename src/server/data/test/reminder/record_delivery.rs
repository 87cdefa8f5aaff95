use super::*;

/// Tests recording delivery of a one-off reminder.
///
/// Expected: reminder deactivated, remind_at unchanged, last_sent_at set
#[tokio::test]
async fn deactivates_without_next_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let reminder = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(at(1, 8, 0))
        .build()
        .await?;

    let updated = ReminderRepository::new(db)
        .record_delivery(reminder.id, at(1, 8, 1), None)
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.remind_at, at(1, 8, 0));
    assert_eq!(updated.last_sent_at, Some(at(1, 8, 1)));

    Ok(())
}

/// Tests recording delivery of a repeating reminder.
///
/// Expected: reminder stays active and moves to the next time
#[tokio::test]
async fn moves_to_next_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let reminder = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(at(1, 8, 0))
        .recurrence(RecurrenceEntity::Daily)
        .build()
        .await?;

    let updated = ReminderRepository::new(db)
        .record_delivery(reminder.id, at(1, 8, 0), Some(at(2, 8, 0)))
        .await?
        .unwrap();

    assert!(updated.active);
    assert_eq!(updated.remind_at, at(2, 8, 0));
    assert_eq!(updated.last_sent_at, Some(at(1, 8, 0)));

    Ok(())
}

/// Tests recording delivery for a reminder deleted in the meantime.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReminderRepository::new(db)
        .record_delivery(999, at(1, 8, 0), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
