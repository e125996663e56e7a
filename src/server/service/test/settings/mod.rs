use crate::{
    model::settings::{ColorsDto, GalleryImageDto, UpdateSiteSettingsDto},
    server::{
        error::AppError,
        model::settings::{UpdateSettingsParams, DEFAULT_SITE_NAME, SETTINGS_ROW_ID},
        service::settings::SettingsService,
    },
};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod update;

fn gallery_image(id: Option<i32>, url: &str) -> GalleryImageDto {
    GalleryImageDto {
        id,
        url: url.to_string(),
        caption: None,
        alt: None,
    }
}

fn params(dto: UpdateSiteSettingsDto) -> UpdateSettingsParams {
    UpdateSettingsParams::from_dto(dto).unwrap()
}
