//! Gallery image domain models.

use crate::{
    model::settings::GalleryImageDto,
    server::{data::reconcile::Identified, error::AppError},
};

/// A gallery image as submitted in a settings write.
///
/// `position` is the item's index in the submitted list; the stored order follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImageData {
    /// Row id echoed back by the client, if any.
    pub id: Option<i32>,
    pub url: String,
    pub caption: Option<String>,
    pub alt: Option<String>,
    pub position: i32,
}

impl GalleryImageData {
    /// Converts the submitted gallery list, validating that every image has a url.
    ///
    /// # Arguments
    /// - `dtos` - Gallery images in the order they should be displayed
    ///
    /// # Returns
    /// - `Ok(Vec<GalleryImageData>)` - Images with positions assigned from list order
    /// - `Err(AppError::BadRequest)` - An image has an empty url
    pub fn from_dtos(dtos: Vec<GalleryImageDto>) -> Result<Vec<Self>, AppError> {
        dtos.into_iter()
            .enumerate()
            .map(|(index, dto)| {
                if dto.url.trim().is_empty() {
                    return Err(AppError::BadRequest(format!(
                        "Gallery image {} is missing a url",
                        index + 1
                    )));
                }

                Ok(Self {
                    id: dto.id,
                    url: dto.url,
                    caption: dto.caption.filter(|c| !c.is_empty()),
                    alt: dto.alt.filter(|a| !a.is_empty()),
                    position: index as i32,
                })
            })
            .collect()
    }
}

impl Identified for GalleryImageData {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// A stored gallery image.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub alt: Option<String>,
    pub position: i32,
}

impl GalleryImage {
    pub fn from_entity(entity: entity::gallery_image::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            caption: entity.caption,
            alt: entity.alt,
            position: entity.position,
        }
    }

    /// The id is included so clients can send it back unchanged on the next write.
    pub fn into_dto(self) -> GalleryImageDto {
        GalleryImageDto {
            id: Some(self.id),
            url: self.url,
            caption: self.caption,
            alt: self.alt,
        }
    }
}
