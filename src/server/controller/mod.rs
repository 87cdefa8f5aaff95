pub mod chat;
pub mod meta;
pub mod reminder;
pub mod user;
