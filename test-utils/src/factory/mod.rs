//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let chat = factory::create_chat(&db).await?;
//! let reminder = factory::reminder::ReminderFactory::new(&db, chat.chat_id)
//!     .text("Feed the cat")
//!     .build()
//!     .await?;
//! ```

pub mod bot_chat;
pub mod helpers;
pub mod reminder;
pub mod user;

pub use bot_chat::create_chat;
pub use reminder::create_reminder;
pub use user::create_user;
