use super::*;

/// Tests replacing a category's permission set.
///
/// Starting from guest and member rows, submits member (changed) and moderator.
///
/// Expected: exactly member and moderator rows with the submitted flags
#[tokio::test]
async fn replaces_whole_permission_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, guest) = factory::helpers::create_category_with_permission(db, "guest").await?;
    factory::create_permission(db, category.id, "member").await?;

    let repo = ForumPermissionRepository::new(db);
    let outcome = replace_all(
        &repo,
        category.id,
        &[permission("member", false), permission("moderator", true)],
    )
    .await?;

    assert_eq!(outcome.deleted.len(), 2);
    assert!(outcome.deleted.contains(&guest.id));
    assert_eq!(outcome.inserted.len(), 2);

    let rows = entity::prelude::ForumCategoryPermission::find()
        .filter(entity::forum_category_permission::Column::CategoryId.eq(category.id))
        .all(db)
        .await?;
    let mut roles: Vec<(&str, bool)> = rows
        .iter()
        .map(|p| (p.role.as_str(), p.can_moderate))
        .collect();
    roles.sort();
    assert_eq!(roles, vec![("member", false), ("moderator", true)]);

    Ok(())
}

/// Tests that resubmitting a role does not violate the per-category uniqueness.
///
/// Expected: Ok, one row per role
#[tokio::test]
async fn resubmitting_same_roles_keeps_one_row_per_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, _) = factory::helpers::create_category_with_permission(db, "member").await?;

    let repo = ForumPermissionRepository::new(db);
    replace_all(&repo, category.id, &[permission("member", true)]).await?;
    replace_all(&repo, category.id, &[permission("member", true)]).await?;

    assert_eq!(repo.current_ids(category.id).await?.len(), 1);

    Ok(())
}
