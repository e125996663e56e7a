use crate::server::{
    data::settings::SiteSettingsRepository,
    model::settings::{DEFAULT_SITE_NAME, SETTINGS_ROW_ID},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod get_or_create;
mod update;
