use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Recurrence;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reminder")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub chat_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    /// Next time the reminder fires.
    pub remind_at: DateTimeUtc,
    pub recurrence: Recurrence,
    pub active: bool,
    pub last_sent_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bot_chat::Entity",
        from = "Column::ChatId",
        to = "super::bot_chat::Column::ChatId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BotChat,
}

impl Related<super::bot_chat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BotChat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
