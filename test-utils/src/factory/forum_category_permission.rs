//! Forum category permission factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating permission rows of a forum category.
///
/// Defaults to a `"member"` role that can view, post and reply but not moderate.
pub struct ForumCategoryPermissionFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    role: String,
    can_view: bool,
    can_post: bool,
    can_reply: bool,
    can_moderate: bool,
}

impl<'a> ForumCategoryPermissionFactory<'a> {
    /// Creates a factory for the given category.
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        Self {
            db,
            category_id,
            role: "member".to_string(),
            can_view: true,
            can_post: true,
            can_reply: true,
            can_moderate: false,
        }
    }

    /// Sets the role identifier.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the view flag.
    pub fn can_view(mut self, can_view: bool) -> Self {
        self.can_view = can_view;
        self
    }

    /// Sets the post flag.
    pub fn can_post(mut self, can_post: bool) -> Self {
        self.can_post = can_post;
        self
    }

    /// Sets the reply flag.
    pub fn can_reply(mut self, can_reply: bool) -> Self {
        self.can_reply = can_reply;
        self
    }

    /// Sets the moderate flag.
    pub fn can_moderate(mut self, can_moderate: bool) -> Self {
        self.can_moderate = can_moderate;
        self
    }

    /// Builds and inserts the permission row.
    pub async fn build(self) -> Result<entity::forum_category_permission::Model, DbErr> {
        entity::forum_category_permission::ActiveModel {
            category_id: ActiveValue::Set(self.category_id),
            role: ActiveValue::Set(self.role),
            can_view: ActiveValue::Set(self.can_view),
            can_post: ActiveValue::Set(self.can_post),
            can_reply: ActiveValue::Set(self.can_reply),
            can_moderate: ActiveValue::Set(self.can_moderate),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permission row with default flags for the given role.
pub async fn create_permission(
    db: &DatabaseConnection,
    category_id: i32,
    role: &str,
) -> Result<entity::forum_category_permission::Model, DbErr> {
    ForumCategoryPermissionFactory::new(db, category_id)
        .role(role)
        .build()
        .await
}
