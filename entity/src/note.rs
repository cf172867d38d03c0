use sea_orm::entity::prelude::*;

/// Moderator annotation attached to a guild member.
///
/// Discord snowflakes are stored as `i64`; every snowflake fits below `i64::MAX`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "note")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub subject_user_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_id: i64,
    pub author_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
