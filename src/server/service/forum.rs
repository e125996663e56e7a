use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{
        forum::{ForumCategoryRepository, ForumPermissionRepository},
        reconcile::{diff_by_id, replace_all},
        settings::SiteSettingsRepository,
    },
    error::AppError,
    model::forum::{ForumCategory, SyncForumCategoriesParams},
    service::unit_of_work::UnitOfWork,
};

const SAVE_FAILED: &str = "Failed to save forum categories";

pub struct ForumCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every forum category in display order.
    ///
    /// Does not create the settings row; without one there are no categories.
    pub async fn get_all(&self) -> Result<Vec<ForumCategory>, AppError> {
        let Some(settings) = SiteSettingsRepository::new(self.db).find().await? else {
            return Ok(Vec::new());
        };

        Ok(ForumCategoryRepository::new(self.db)
            .get_by_settings_id(settings.id)
            .await?)
    }

    /// Replaces the forum taxonomy with `params.categories` in one transaction.
    ///
    /// Categories are reconciled by id; each surviving or new category gets exactly the
    /// submitted permission set. Nothing is applied unless everything is.
    ///
    /// # Returns
    /// - `Ok(Vec<ForumCategory>)` - The committed taxonomy, read back after commit
    /// - `Err(AppError::SaveFailed)` - The write was rolled back
    pub async fn sync(
        &self,
        params: SyncForumCategoriesParams,
    ) -> Result<Vec<ForumCategory>, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = apply_sync(uow.conn(), params).await;
        uow.finish(result, SAVE_FAILED).await?;

        self.get_all().await
    }
}

async fn apply_sync<C: ConnectionTrait>(
    db: &C,
    params: SyncForumCategoriesParams,
) -> Result<(), AppError> {
    let settings = SiteSettingsRepository::new(db).get_or_create().await?;

    let outcome = diff_by_id(
        &ForumCategoryRepository::new(db),
        settings.id,
        &params.categories,
    )
    .await?;
    tracing::debug!(
        "Reconciled forum categories: {} inserted, {} updated, {} deleted",
        outcome.inserted.len(),
        outcome.updated.len(),
        outcome.deleted.len()
    );

    let permissions = ForumPermissionRepository::new(db);
    for (category, category_id) in params.categories.iter().zip(&outcome.ids) {
        replace_all(&permissions, *category_id, &category.permissions).await?;
    }

    Ok(())
}
