use super::*;

/// Tests that deleting through a chat only removes that chat's reminders.
///
/// Expected: Ok(false) for a foreign chat, Ok(true) for the owner
#[tokio::test]
async fn delete_for_chat_checks_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (chat, reminder) = factory::helpers::create_reminder_with_chat(db).await?;
    let other = factory::create_chat(db).await?;
    let repo = ReminderRepository::new(db);

    assert!(!repo.delete_for_chat(reminder.id, other.chat_id).await?);
    assert!(repo.find_by_id(reminder.id).await?.is_some());

    assert!(repo.delete_for_chat(reminder.id, chat.chat_id).await?);
    assert!(repo.find_by_id(reminder.id).await?.is_none());

    Ok(())
}

/// Tests deleting a reminder by id.
///
/// Expected: Ok(true) first, Ok(false) once it is gone
#[tokio::test]
async fn delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reminder) = factory::helpers::create_reminder_with_chat(db).await?;
    let repo = ReminderRepository::new(db);

    assert!(repo.delete(reminder.id).await?);
    assert!(!repo.delete(reminder.id).await?);

    Ok(())
}
