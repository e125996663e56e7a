use super::*;

/// Tests category ordering and permission loading.
///
/// Verifies that categories are ordered by sort order (ties by id) and carry
/// their own permission rows only.
///
/// Expected: Ok with ordered categories and attached permissions
#[tokio::test]
async fn returns_categories_in_sort_order_with_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let last = factory::forum_category::ForumCategoryFactory::new(db, settings.id)
        .name("Off Topic")
        .sort_order(10)
        .build()
        .await?;
    let first = factory::forum_category::ForumCategoryFactory::new(db, settings.id)
        .name("Announcements")
        .description("News")
        .sort_order(0)
        .build()
        .await?;
    factory::create_permission(db, first.id, "guest").await?;
    factory::create_permission(db, first.id, "member").await?;
    factory::create_permission(db, last.id, "member").await?;

    let categories = ForumCategoryRepository::new(db)
        .get_by_settings_id(settings.id)
        .await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Announcements");
    assert_eq!(categories[0].description.as_deref(), Some("News"));
    let roles: Vec<&str> = categories[0]
        .permissions
        .iter()
        .map(|p| p.role.as_str())
        .collect();
    assert_eq!(roles, vec!["guest", "member"]);
    assert_eq!(categories[1].id, last.id);
    assert_eq!(categories[1].permissions.len(), 1);

    Ok(())
}

/// Tests that equal sort orders fall back to id order.
///
/// Expected: Ok with categories in insertion order
#[tokio::test]
async fn breaks_sort_order_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let a = factory::create_category(db, settings.id).await?;
    let b = factory::create_category(db, settings.id).await?;

    let categories = ForumCategoryRepository::new(db)
        .get_by_settings_id(settings.id)
        .await?;

    let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    assert!(categories.iter().all(|c| c.permissions.is_empty()));

    Ok(())
}
