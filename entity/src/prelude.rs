pub use super::bot_chat::Entity as BotChat;
pub use super::reminder::Entity as Reminder;
pub use super::user::Entity as User;
