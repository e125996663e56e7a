//! Forum category domain models and parameters.
//!
//! Categories are reconciled by id against the stored set. Their permissions carry
//! no identity of their own and are replaced as a whole on every write.

use std::collections::HashSet;

use crate::{
    model::forum::{ForumCategoriesDto, ForumCategoryDto, ForumCategoryPermissionDto},
    server::{data::reconcile::Identified, error::AppError},
};

/// Access flags of one role, as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionData {
    pub role: String,
    pub can_view: bool,
    pub can_post: bool,
    pub can_reply: bool,
    pub can_moderate: bool,
}

impl From<ForumCategoryPermissionDto> for PermissionData {
    fn from(dto: ForumCategoryPermissionDto) -> Self {
        Self {
            role: dto.role,
            can_view: dto.can_view,
            can_post: dto.can_post,
            can_reply: dto.can_reply,
            can_moderate: dto.can_moderate,
        }
    }
}

/// A forum category as submitted in a sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumCategoryData {
    /// Row id echoed back by the client; `None` for new categories.
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    /// Complete permission set; replaces whatever is stored.
    pub permissions: Vec<PermissionData>,
}

impl Identified for ForumCategoryData {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

/// Parameters for replacing the whole forum taxonomy.
#[derive(Debug, Clone)]
pub struct SyncForumCategoriesParams {
    /// Desired categories; anything stored but not listed here is deleted.
    pub categories: Vec<ForumCategoryData>,
}

impl SyncForumCategoriesParams {
    /// Converts and validates the submitted category list.
    ///
    /// # Arguments
    /// - `dto` - Category list from the request body
    ///
    /// # Returns
    /// - `Ok(SyncForumCategoriesParams)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - A category has an empty name, a permission has an
    ///   empty role, or a role appears twice within one category
    pub fn from_dto(dto: ForumCategoriesDto) -> Result<Self, AppError> {
        let categories = dto
            .categories
            .into_iter()
            .map(ForumCategoryData::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { categories })
    }
}

impl TryFrom<ForumCategoryDto> for ForumCategoryData {
    type Error = AppError;

    fn try_from(dto: ForumCategoryDto) -> Result<Self, Self::Error> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Forum category name must not be empty".to_string(),
            ));
        }

        let mut roles = HashSet::new();
        for permission in &dto.permissions {
            if permission.role.trim().is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Permission role in category '{}' must not be empty",
                    name
                )));
            }
            if !roles.insert(permission.role.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "Duplicate permission role '{}' in category '{}'",
                    permission.role, name
                )));
            }
        }

        Ok(Self {
            id: dto.id,
            name,
            description: dto.description.filter(|d| !d.is_empty()),
            sort_order: dto.sort_order,
            permissions: dto.permissions.into_iter().map(PermissionData::from).collect(),
        })
    }
}

/// A stored permission row.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub role: String,
    pub can_view: bool,
    pub can_post: bool,
    pub can_reply: bool,
    pub can_moderate: bool,
}

impl Permission {
    pub fn from_entity(entity: entity::forum_category_permission::Model) -> Self {
        Self {
            role: entity.role,
            can_view: entity.can_view,
            can_post: entity.can_post,
            can_reply: entity.can_reply,
            can_moderate: entity.can_moderate,
        }
    }

    pub fn into_dto(self) -> ForumCategoryPermissionDto {
        ForumCategoryPermissionDto {
            role: self.role,
            can_view: self.can_view,
            can_post: self.can_post,
            can_reply: self.can_reply,
            can_moderate: self.can_moderate,
        }
    }
}

/// A stored forum category together with its permissions.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub permissions: Vec<Permission>,
}

impl ForumCategory {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The category row
    /// - `permissions` - Permission rows belonging to the category, already ordered
    pub fn from_entity(
        entity: entity::forum_category::Model,
        permissions: Vec<entity::forum_category_permission::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            sort_order: entity.sort_order,
            permissions: permissions.into_iter().map(Permission::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> ForumCategoryDto {
        ForumCategoryDto {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            sort_order: self.sort_order,
            permissions: self.permissions.into_iter().map(Permission::into_dto).collect(),
        }
    }
}
