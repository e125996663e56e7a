//! Repositories for forum categories and their permission rows.

use std::collections::HashMap;

use async_trait::async_trait;
use entity::{forum_category, forum_category_permission};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::reconcile::ChildStore,
    model::forum::{ForumCategory, ForumCategoryData, PermissionData},
};

pub struct ForumCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForumCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all categories of the settings row with their permissions.
    ///
    /// Categories are ordered by `sort_order`, then id; permissions by id. Permissions
    /// are fetched in one query for all categories.
    ///
    /// # Arguments
    /// - `settings_id` - Owning settings row
    ///
    /// # Returns
    /// - `Ok(Vec<ForumCategory>)` - Categories in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_settings_id(
        &self,
        settings_id: i32,
    ) -> Result<Vec<ForumCategory>, DbErr> {
        let categories = entity::prelude::ForumCategory::find()
            .filter(forum_category::Column::SettingsId.eq(settings_id))
            .order_by_asc(forum_category::Column::SortOrder)
            .order_by_asc(forum_category::Column::Id)
            .all(self.db)
            .await?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
        let mut permissions_map: HashMap<i32, Vec<forum_category_permission::Model>> =
            HashMap::new();
        for permission in entity::prelude::ForumCategoryPermission::find()
            .filter(forum_category_permission::Column::CategoryId.is_in(category_ids))
            .order_by_asc(forum_category_permission::Column::Id)
            .all(self.db)
            .await?
        {
            permissions_map
                .entry(permission.category_id)
                .or_default()
                .push(permission);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let permissions = permissions_map.remove(&category.id).unwrap_or_default();
                ForumCategory::from_entity(category, permissions)
            })
            .collect())
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> ChildStore for ForumCategoryRepository<'a, C> {
    type Item = ForumCategoryData;

    async fn current_ids(&self, settings_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ForumCategory::find()
            .select_only()
            .column(forum_category::Column::Id)
            .filter(forum_category::Column::SettingsId.eq(settings_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn insert(&self, settings_id: i32, category: &ForumCategoryData) -> Result<i32, DbErr> {
        let model = forum_category::ActiveModel {
            settings_id: ActiveValue::Set(settings_id),
            name: ActiveValue::Set(category.name.clone()),
            description: ActiveValue::Set(category.description.clone()),
            sort_order: ActiveValue::Set(category.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.id)
    }

    async fn update(&self, id: i32, category: &ForumCategoryData) -> Result<(), DbErr> {
        forum_category::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(category.name.clone()),
            description: ActiveValue::Set(category.description.clone()),
            sort_order: ActiveValue::Set(category.sort_order),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the categories after deleting their permission rows.
    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::ForumCategoryPermission::delete_many()
            .filter(forum_category_permission::Column::CategoryId.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        let result = entity::prelude::ForumCategory::delete_many()
            .filter(forum_category::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_parent(&self, settings_id: i32) -> Result<u64, DbErr> {
        let ids = self.current_ids(settings_id).await?;
        if ids.is_empty() {
            return Ok(0);
        }

        self.delete_by_ids(&ids).await
    }
}

pub struct ForumPermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForumPermissionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C: ConnectionTrait> ChildStore for ForumPermissionRepository<'a, C> {
    type Item = PermissionData;

    async fn current_ids(&self, category_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ForumCategoryPermission::find()
            .select_only()
            .column(forum_category_permission::Column::Id)
            .filter(forum_category_permission::Column::CategoryId.eq(category_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn insert(&self, category_id: i32, permission: &PermissionData) -> Result<i32, DbErr> {
        let model = forum_category_permission::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            role: ActiveValue::Set(permission.role.clone()),
            can_view: ActiveValue::Set(permission.can_view),
            can_post: ActiveValue::Set(permission.can_post),
            can_reply: ActiveValue::Set(permission.can_reply),
            can_moderate: ActiveValue::Set(permission.can_moderate),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.id)
    }

    async fn update(&self, id: i32, permission: &PermissionData) -> Result<(), DbErr> {
        forum_category_permission::ActiveModel {
            id: ActiveValue::Unchanged(id),
            role: ActiveValue::Set(permission.role.clone()),
            can_view: ActiveValue::Set(permission.can_view),
            can_post: ActiveValue::Set(permission.can_post),
            can_reply: ActiveValue::Set(permission.can_reply),
            can_moderate: ActiveValue::Set(permission.can_moderate),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::ForumCategoryPermission::delete_many()
            .filter(forum_category_permission::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_parent(&self, category_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ForumCategoryPermission::delete_many()
            .filter(forum_category_permission::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
