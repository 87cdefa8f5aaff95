//! Telegram update handling.
//!
//! Each text message is parsed into a [`Command`] and dispatched to the matching
//! handler, which returns the reply text. Handlers never fail outward: database errors
//! are logged and answered with a generic apology so the polling loop keeps going.

mod chat;
mod reminder;

#[cfg(test)]
mod test;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    bot::{
        command::{Command, ParseError},
        types::{Chat, Update},
    },
    error::AppError,
    service::chat::BotChatService,
};

const UNKNOWN_INPUT_REPLY: &str = "I only understand commands. Send /help to see them.";
const NOT_REGISTERED_REPLY: &str = "This chat is not registered yet. Send /start first.";
const FAILURE_REPLY: &str = "Something went wrong, please try again later.";

/// Message to send back to a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub chat_id: i64,
    pub text: String,
}

pub struct Handler {
    db: DatabaseConnection,
    utc_offset: FixedOffset,
}

impl Handler {
    pub fn new(db: DatabaseConnection, utc_offset: FixedOffset) -> Self {
        Self { db, utc_offset }
    }

    /// Handles one update; updates without a text message produce no reply.
    pub async fn handle_update(&self, update: Update) -> Option<Reply> {
        let message = update.message?;
        let text = message.text.as_deref()?;

        let reply = handle_message(&self.db, self.utc_offset, &message.chat, text, Utc::now()).await;

        Some(Reply {
            chat_id: message.chat.id,
            text: reply,
        })
    }
}

/// Produces the reply to a chat message received at `now`.
pub async fn handle_message(
    db: &DatabaseConnection,
    utc_offset: FixedOffset,
    chat: &Chat,
    text: &str,
    now: DateTime<Utc>,
) -> String {
    match dispatch(db, utc_offset, chat, text, now).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Failed to handle message from chat {}: {}", chat.id, e);
            FAILURE_REPLY.to_string()
        }
    }
}

async fn dispatch(
    db: &DatabaseConnection,
    utc_offset: FixedOffset,
    chat: &Chat,
    text: &str,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let command = match Command::parse(text) {
        Ok(command) => command,
        Err(ParseError::NotACommand) => return Ok(UNKNOWN_INPUT_REPLY.to_string()),
        Err(ParseError::Unknown(name)) => {
            return Ok(format!(
                "Unknown command /{}. Send /help to see what I can do.",
                name
            ))
        }
        Err(ParseError::Usage(usage)) => return Ok(format!("Usage: {}", usage)),
    };

    if command.requires_registration() && !BotChatService::new(db).is_registered(chat.id).await? {
        return Ok(NOT_REGISTERED_REPLY.to_string());
    }

    tracing::debug!("Chat {} sent {:?}", chat.id, command);

    match command {
        Command::Start => chat::handle_start(db, chat).await,
        Command::Help => Ok(chat::help_text()),
        Command::List => reminder::handle_list(db, utc_offset, chat.id).await,
        Command::Remind {
            when,
            text,
            recurrence,
        } => reminder::handle_remind(db, utc_offset, chat.id, when, text, recurrence, now).await,
        Command::Delete { id } => reminder::handle_delete(db, chat.id, id).await,
    }
}
