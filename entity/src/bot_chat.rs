use sea_orm::entity::prelude::*;

/// Telegram chat that registered with the bot via `/start`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot_chat")]
pub struct Model {
    /// Telegram chat id, negative for groups.
    #[sea_orm(primary_key, auto_increment = false)]
    pub chat_id: i64,
    pub title: String,
    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reminder::Entity")]
    Reminder,
}

impl Related<super::reminder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reminder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
