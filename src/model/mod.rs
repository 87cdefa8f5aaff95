//! Data transfer objects shared by the HTTP API.

pub mod api;
pub mod chat;
pub mod reminder;
pub mod user;
