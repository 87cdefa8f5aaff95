//! Telegram bot integration for family reminders.
//!
//! Chats register with `/start`, create one-off or repeating reminders with bot
//! commands and receive a message when a reminder falls due.
//!
//! The bot is started during server startup in a separate tokio task so it never blocks
//! the HTTP server. It long-polls the Telegram Bot API through a small reqwest client
//! whose handle is shared with the reminder scheduler for outgoing messages. Any
//! failure to start (missing token, rejected token, network) is logged and leaves the
//! web interface running.

pub mod client;
pub mod command;
pub mod handler;
pub mod start;
pub mod types;
