use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::{
        forum::ForumCategoryRepository, gallery::GalleryImageRepository, reconcile::diff_by_id,
        settings::SiteSettingsRepository,
    },
    error::AppError,
    model::settings::{to_flat, SiteSettings, UpdateSettingsParams},
    service::unit_of_work::UnitOfWork,
};

const SAVE_FAILED: &str = "Failed to save settings";

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings aggregate, creating the row with defaults on first access.
    ///
    /// The gallery and the forum taxonomy are loaded with the row.
    pub async fn get(&self) -> Result<SiteSettings, AppError> {
        let row = SiteSettingsRepository::new(self.db).get_or_create().await?;

        Ok(load_aggregate(self.db, row).await?)
    }

    /// Applies a settings write in one transaction and returns the stored result.
    ///
    /// Only the namespaces present in `params.patch` change. When
    /// `params.gallery_images` is present the gallery is reconciled to it by id.
    ///
    /// # Returns
    /// - `Ok(SiteSettings)` - The committed settings, read back after commit
    /// - `Err(AppError::SaveFailed)` - The write was rolled back
    pub async fn update(&self, params: UpdateSettingsParams) -> Result<SiteSettings, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = apply_update(uow.conn(), params).await;
        uow.finish(result, SAVE_FAILED).await?;

        self.get().await
    }
}

async fn apply_update<C: ConnectionTrait>(
    db: &C,
    params: UpdateSettingsParams,
) -> Result<(), AppError> {
    let repo = SiteSettingsRepository::new(db);
    let current = repo.get_or_create().await?;

    repo.update(to_flat(&params.patch, Some(&current), Utc::now()))
        .await?;

    if let Some(images) = params.gallery_images {
        let outcome = diff_by_id(&GalleryImageRepository::new(db), current.id, &images).await?;
        tracing::debug!(
            "Reconciled gallery: {} inserted, {} updated, {} deleted",
            outcome.inserted.len(),
            outcome.updated.len(),
            outcome.deleted.len()
        );
    }

    Ok(())
}

async fn load_aggregate<C: ConnectionTrait>(
    db: &C,
    row: entity::site_settings::Model,
) -> Result<SiteSettings, DbErr> {
    let gallery = GalleryImageRepository::new(db)
        .get_by_settings_id(row.id)
        .await?;
    let forum_categories = ForumCategoryRepository::new(db)
        .get_by_settings_id(row.id)
        .await?;

    Ok(SiteSettings {
        row,
        gallery,
        forum_categories: Some(forum_categories),
    })
}
