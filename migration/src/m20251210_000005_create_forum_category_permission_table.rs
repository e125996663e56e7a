use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000004_create_forum_category_table::ForumCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Permissions must be deleted before their category; no cascade.
        manager
            .create_table(
                Table::create()
                    .table(ForumCategoryPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumCategoryPermission::Id))
                    .col(integer(ForumCategoryPermission::CategoryId))
                    .col(string(ForumCategoryPermission::Role))
                    .col(boolean(ForumCategoryPermission::CanView).default(true))
                    .col(boolean(ForumCategoryPermission::CanPost).default(false))
                    .col(boolean(ForumCategoryPermission::CanReply).default(false))
                    .col(boolean(ForumCategoryPermission::CanModerate).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_category_permission_category_id")
                            .from(
                                ForumCategoryPermission::Table,
                                ForumCategoryPermission::CategoryId,
                            )
                            .to(ForumCategory::Table, ForumCategory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_forum_category_permission_category_role")
                    .table(ForumCategoryPermission::Table)
                    .col(ForumCategoryPermission::CategoryId)
                    .col(ForumCategoryPermission::Role)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ForumCategoryPermission::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumCategoryPermission {
    Table,
    Id,
    CategoryId,
    Role,
    CanView,
    CanPost,
    CanReply,
    CanModerate,
}
