use super::*;

/// Tests selecting due reminders.
///
/// Verifies that only active reminders at or before `now` are returned, oldest first.
///
/// Expected: the two due active reminders
#[tokio::test]
async fn returns_active_reminders_at_or_before_now() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let now = at(10, 12, 0);

    let exactly_now = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(now)
        .build()
        .await?;
    let overdue = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(now + Duration::minutes(1))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(now - Duration::days(1))
        .active(false)
        .build()
        .await?;

    let due = ReminderRepository::new(db).get_due(now).await?;

    assert_eq!(due.len(), 2);
    assert_eq!(due[0].id, overdue.id);
    assert_eq!(due[1].id, exactly_now.id);

    Ok(())
}
