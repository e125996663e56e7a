use sea_orm::entity::prelude::*;

/// Per-role access flags for one forum category.
///
/// At most one row exists per `(category_id, role)`. Rows are never updated in
/// place: a category's permission set is deleted and re-inserted on every write.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "forum_category_permission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub role: String,
    pub can_view: bool,
    pub can_post: bool,
    pub can_reply: bool,
    pub can_moderate: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::forum_category::Entity",
        from = "Column::CategoryId",
        to = "super::forum_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ForumCategory,
}

impl Related<super::forum_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
