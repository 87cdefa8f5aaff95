use sea_orm::DatabaseConnection;

use crate::server::{
    bot::types::Chat, error::AppError, model::chat::UpsertChatParam,
    service::chat::BotChatService,
};

pub fn help_text() -> String {
    [
        "Commands:",
        "/remind <when> <text> - one-off reminder",
        "/daily <HH:MM> <text> - reminder every day",
        "/weekly <when> <text> - reminder every week",
        "/list - active reminders of this chat",
        "/delete <id> - delete a reminder",
        "",
        "<when> is HH:MM, YYYY-MM-DD HH:MM or DD.MM.YYYY HH:MM.",
    ]
    .join("\n")
}

/// Registers the chat, or refreshes its title if it is already known.
pub async fn handle_start(db: &DatabaseConnection, chat: &Chat) -> Result<String, AppError> {
    let registered = BotChatService::new(db)
        .register(UpsertChatParam {
            chat_id: chat.id,
            title: chat.display_title(),
        })
        .await?;

    tracing::info!("Registered chat {} ({})", registered.title, registered.chat_id);

    Ok(format!(
        "Hi {}! This chat will now receive reminders.\n\n{}",
        registered.title,
        help_text()
    ))
}
