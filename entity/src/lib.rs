//! SeaORM entities for the reminderboard database schema.
//!
//! Tables are created by the `migration` crate; these models mirror them
//! column for column.

pub mod prelude;

pub mod bot_chat;
pub mod reminder;
pub mod sea_orm_active_enums;
pub mod user;
