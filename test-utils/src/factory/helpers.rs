//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates the settings row plus one category carrying a single permission row.
///
/// # Arguments
/// - `db` - Database connection
/// - `role` - Role of the permission row
///
/// # Returns
/// - `Ok((settings, category, permission))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_category_with_permission(
    db: &DatabaseConnection,
    role: &str,
) -> Result<
    (
        entity::site_settings::Model,
        entity::forum_category::Model,
        entity::forum_category_permission::Model,
    ),
    DbErr,
> {
    let settings = crate::factory::site_settings::create_settings(db).await?;
    let category = crate::factory::forum_category::create_category(db, settings.id).await?;
    let permission = crate::factory::forum_category_permission::ForumCategoryPermissionFactory::new(
        db,
        category.id,
    )
    .role(role)
    .build()
    .await?;

    Ok((settings, category, permission))
}
