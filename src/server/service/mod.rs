//! Service layer orchestrating business logic between controllers, the bot and the
//! data layer.

pub mod chat;
pub mod reminder;
pub mod user;
