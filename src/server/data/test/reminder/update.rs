use super::*;

/// Tests a partial reminder update.
///
/// Expected: provided fields changed, others untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reminder_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = factory::create_chat(db).await?;
    let reminder = factory::reminder::ReminderFactory::new(db, chat.chat_id)
        .text("Swimming")
        .remind_at(at(4, 16, 0))
        .build()
        .await?;

    let updated = ReminderRepository::new(db)
        .update(
            reminder.id,
            UpdateReminderParam {
                recurrence: Some(Recurrence::Weekly),
                active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.text, "Swimming");
    assert_eq!(updated.remind_at, at(4, 16, 0));
    assert_eq!(updated.recurrence, Recurrence::Weekly);
    assert!(!updated.active);

    Ok(())
}
