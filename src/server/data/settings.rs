//! Repository for the singleton settings row.

use chrono::{DateTime, Utc};
use entity::site_settings;
use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::settings::{default_model, SETTINGS_ROW_ID};

pub struct SiteSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SiteSettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the settings row without creating it.
    pub async fn find(&self) -> Result<Option<site_settings::Model>, DbErr> {
        entity::prelude::SiteSettings::find_by_id(SETTINGS_ROW_ID)
            .one(self.db)
            .await
    }

    /// Inserts the default settings row unless one already exists.
    ///
    /// The insert targets the fixed primary key and ignores conflicts, so concurrent
    /// callers cannot create a second row.
    ///
    /// # Returns
    /// - `Ok(true)` - This call created the row
    /// - `Ok(false)` - The row already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_default_if_missing(&self, now: DateTime<Utc>) -> Result<bool, DbErr> {
        let rows = entity::prelude::SiteSettings::insert(default_model(now))
            .on_conflict(
                OnConflict::column(site_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows > 0)
    }

    /// Reads the settings row, creating it with defaults first if needed.
    ///
    /// # Returns
    /// - `Ok(Model)` - The settings row
    /// - `Err(DbErr)` - Database error during read or insert
    pub async fn get_or_create(&self) -> Result<site_settings::Model, DbErr> {
        if let Some(settings) = self.find().await? {
            return Ok(settings);
        }

        if self.create_default_if_missing(Utc::now()).await? {
            tracing::info!("Created default site settings");
        }

        self.find().await?.ok_or(DbErr::RecordNotFound(format!(
            "Site settings row {} missing after creation",
            SETTINGS_ROW_ID
        )))
    }

    /// Writes the `Set` columns of `row`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated row
    /// - `Err(DbErr::RecordNotUpdated)` - The row does not exist
    pub async fn update(
        &self,
        row: site_settings::ActiveModel,
    ) -> Result<site_settings::Model, DbErr> {
        row.update(self.db).await
    }
}
