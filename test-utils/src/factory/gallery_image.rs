//! Gallery image factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating gallery images owned by a settings row.
pub struct GalleryImageFactory<'a> {
    db: &'a DatabaseConnection,
    settings_id: i32,
    url: String,
    caption: Option<String>,
    alt: Option<String>,
    position: i32,
}

impl<'a> GalleryImageFactory<'a> {
    /// Creates a factory with a unique default url and no caption or alt text.
    pub fn new(db: &'a DatabaseConnection, settings_id: i32) -> Self {
        Self {
            db,
            settings_id,
            url: format!("https://cdn.example.com/gallery/{}.png", next_id()),
            caption: None,
            alt: None,
            position: 0,
        }
    }

    /// Sets the image url.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the alt text.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Sets the display position.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the gallery image.
    pub async fn build(self) -> Result<entity::gallery_image::Model, DbErr> {
        entity::gallery_image::ActiveModel {
            settings_id: ActiveValue::Set(self.settings_id),
            url: ActiveValue::Set(self.url),
            caption: ActiveValue::Set(self.caption),
            alt: ActiveValue::Set(self.alt),
            position: ActiveValue::Set(self.position),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gallery image with the given url.
pub async fn create_gallery_image(
    db: &DatabaseConnection,
    settings_id: i32,
    url: &str,
) -> Result<entity::gallery_image::Model, DbErr> {
    GalleryImageFactory::new(db, settings_id).url(url).build().await
}
