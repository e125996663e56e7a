use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "forum_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub settings_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::site_settings::Entity",
        from = "Column::SettingsId",
        to = "super::site_settings::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SiteSettings,
    #[sea_orm(has_many = "super::forum_category_permission::Entity")]
    ForumCategoryPermission,
}

impl Related<super::site_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiteSettings.def()
    }
}

impl Related<super::forum_category_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ForumCategoryPermission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
