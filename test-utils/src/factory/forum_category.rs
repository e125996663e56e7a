//! Forum category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating forum categories owned by a settings row.
pub struct ForumCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    settings_id: i32,
    name: String,
    description: Option<String>,
    sort_order: i32,
}

impl<'a> ForumCategoryFactory<'a> {
    /// Creates a factory with defaults `name = "Category {n}"`, no description, sort order 0.
    pub fn new(db: &'a DatabaseConnection, settings_id: i32) -> Self {
        Self {
            db,
            settings_id,
            name: format!("Category {}", next_id()),
            description: None,
            sort_order: 0,
        }
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the sort order.
    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the category.
    pub async fn build(self) -> Result<entity::forum_category::Model, DbErr> {
        entity::forum_category::ActiveModel {
            settings_id: ActiveValue::Set(self.settings_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
    settings_id: i32,
) -> Result<entity::forum_category::Model, DbErr> {
    ForumCategoryFactory::new(db, settings_id).build().await
}
