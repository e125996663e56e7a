//! Repository for gallery images owned by the settings row.

use async_trait::async_trait;
use entity::gallery_image;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::reconcile::ChildStore,
    model::gallery::{GalleryImage, GalleryImageData},
};

pub struct GalleryImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GalleryImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all images of the settings row in display order.
    pub async fn get_by_settings_id(&self, settings_id: i32) -> Result<Vec<GalleryImage>, DbErr> {
        let images = entity::prelude::GalleryImage::find()
            .filter(gallery_image::Column::SettingsId.eq(settings_id))
            .order_by_asc(gallery_image::Column::Position)
            .order_by_asc(gallery_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(images.into_iter().map(GalleryImage::from_entity).collect())
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> ChildStore for GalleryImageRepository<'a, C> {
    type Item = GalleryImageData;

    async fn current_ids(&self, settings_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::GalleryImage::find()
            .select_only()
            .column(gallery_image::Column::Id)
            .filter(gallery_image::Column::SettingsId.eq(settings_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn insert(&self, settings_id: i32, image: &GalleryImageData) -> Result<i32, DbErr> {
        let model = gallery_image::ActiveModel {
            settings_id: ActiveValue::Set(settings_id),
            url: ActiveValue::Set(image.url.clone()),
            caption: ActiveValue::Set(image.caption.clone()),
            alt: ActiveValue::Set(image.alt.clone()),
            position: ActiveValue::Set(image.position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.id)
    }

    async fn update(&self, id: i32, image: &GalleryImageData) -> Result<(), DbErr> {
        gallery_image::ActiveModel {
            id: ActiveValue::Unchanged(id),
            url: ActiveValue::Set(image.url.clone()),
            caption: ActiveValue::Set(image.caption.clone()),
            alt: ActiveValue::Set(image.alt.clone()),
            position: ActiveValue::Set(image.position),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::GalleryImage::delete_many()
            .filter(gallery_image::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_parent(&self, settings_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GalleryImage::delete_many()
            .filter(gallery_image::Column::SettingsId.eq(settings_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
