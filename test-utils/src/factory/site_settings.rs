//! Site settings factory inserting the singleton settings row.

use crate::fixture;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for inserting the settings row, defaulting to the fixture values.
pub struct SiteSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::site_settings::Model,
}

impl<'a> SiteSettingsFactory<'a> {
    /// Creates a factory seeded with `fixture::site_settings::entity()`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            model: fixture::site_settings::entity(),
        }
    }

    /// Replaces the row to insert with a customized fixture model.
    pub fn model(mut self, model: entity::site_settings::Model) -> Self {
        self.model = model;
        self
    }

    /// Inserts the settings row.
    ///
    /// # Returns
    /// - `Ok(entity::site_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error, including a primary key conflict when the row exists
    pub async fn build(self) -> Result<entity::site_settings::Model, DbErr> {
        // Every column is explicitly set, including the fixed primary key.
        let active_model = self.model.into_active_model().reset_all();
        active_model.insert(self.db).await
    }
}

/// Inserts the settings row with fixture values.
pub async fn create_settings(
    db: &DatabaseConnection,
) -> Result<entity::site_settings::Model, DbErr> {
    SiteSettingsFactory::new(db).build().await
}
