use super::*;

/// Tests listing reminders filtered by chat.
///
/// Expected: only the chat's reminders, ordered by remind_at
#[tokio::test]
async fn filters_by_chat_and_orders_by_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let other = factory::create_chat(db).await?;

    let later = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(at(5, 10, 0))
        .build()
        .await?;
    let sooner = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .remind_at(at(3, 10, 0))
        .active(false)
        .build()
        .await?;
    factory::create_reminder(db, other.chat_id).await?;

    let repo = ReminderRepository::new(db);

    let reminders = repo.get_all(Some(chat.chat_id)).await?;
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].id, sooner.id);
    assert_eq!(reminders[1].id, later.id);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that the chat listing used by the bot skips inactive reminders.
///
/// Expected: only active reminders of the chat
#[tokio::test]
async fn active_by_chat_skips_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let active = factory::create_reminder(db, chat.chat_id).await?;
    factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .active(false)
        .build()
        .await?;

    let reminders = ReminderRepository::new(db)
        .get_active_by_chat(chat.chat_id)
        .await?;

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, active.id);

    Ok(())
}
