use crate::server::{
    data::{
        gallery::GalleryImageRepository,
        reconcile::{diff_by_id, ChildStore},
    },
    model::gallery::GalleryImageData,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_settings_id;
mod reconcile;

fn image(id: Option<i32>, url: &str, position: i32) -> GalleryImageData {
    GalleryImageData {
        id,
        url: url.to_string(),
        caption: None,
        alt: None,
        position,
    }
}
