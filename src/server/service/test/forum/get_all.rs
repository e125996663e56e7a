use super::*;

/// Tests reading categories before any settings exist.
///
/// Expected: Ok with empty list, settings row not created
#[tokio::test]
async fn returns_empty_without_settings_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let categories = ForumCategoryService::new(db).get_all().await?;

    assert!(categories.is_empty());
    assert_eq!(entity::prelude::SiteSettings::find().count(db).await?, 0);

    Ok(())
}

/// Tests reading stored categories.
///
/// Expected: Ok with categories ordered by sort order
#[tokio::test]
async fn returns_categories_in_display_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    factory::forum_category::ForumCategoryFactory::new(db, settings.id)
        .name("Second")
        .sort_order(2)
        .build()
        .await?;
    factory::forum_category::ForumCategoryFactory::new(db, settings.id)
        .name("First")
        .sort_order(1)
        .build()
        .await?;

    let names: Vec<String> = ForumCategoryService::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["First".to_string(), "Second".to_string()]);

    Ok(())
}
