//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a registered chat together with one default reminder for it.
///
/// # Returns
/// - `Ok((chat, reminder))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reminder_with_chat(
    db: &DatabaseConnection,
) -> Result<(entity::bot_chat::Model, entity::reminder::Model), DbErr> {
    let chat = crate::factory::bot_chat::create_chat(db).await?;
    let reminder = crate::factory::reminder::create_reminder(db, chat.chat_id).await?;

    Ok((chat, reminder))
}
