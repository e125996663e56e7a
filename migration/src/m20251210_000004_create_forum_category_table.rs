use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000002_create_site_settings_table::SiteSettings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumCategory::Id))
                    .col(integer(ForumCategory::SettingsId))
                    .col(string(ForumCategory::Name))
                    .col(text_null(ForumCategory::Description))
                    .col(integer(ForumCategory::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_category_settings_id")
                            .from(ForumCategory::Table, ForumCategory::SettingsId)
                            .to(SiteSettings::Table, SiteSettings::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumCategory {
    Table,
    Id,
    SettingsId,
    Name,
    Description,
    SortOrder,
}
