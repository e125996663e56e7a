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
                    .table(GalleryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryImage::Id))
                    .col(integer(GalleryImage::SettingsId))
                    .col(string(GalleryImage::Url))
                    .col(string_null(GalleryImage::Caption))
                    .col(string_null(GalleryImage::Alt))
                    .col(integer(GalleryImage::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_image_settings_id")
                            .from(GalleryImage::Table, GalleryImage::SettingsId)
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
            .drop_table(Table::drop().table(GalleryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryImage {
    Table,
    Id,
    SettingsId,
    Url,
    Caption,
    Alt,
    Position,
}
