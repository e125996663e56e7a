use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access flags of one role inside a forum category.
///
/// Permission rows carry no id on the wire: a category's permissions are
/// always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategoryPermissionDto {
    pub role: String,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_post: bool,
    #[serde(default)]
    pub can_reply: bool,
    #[serde(default)]
    pub can_moderate: bool,
}

/// A forum category as read from or submitted to the admin UI.
///
/// `id` is absent for categories the client has just added; an id the server
/// no longer knows is treated the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForumCategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub permissions: Vec<ForumCategoryPermissionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForumCategoriesDto {
    pub categories: Vec<ForumCategoryDto>,
}
