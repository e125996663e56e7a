use super::*;

/// Tests the first read on an empty database.
///
/// Expected: Ok with defaults, empty gallery and empty forum taxonomy
#[tokio::test]
async fn creates_defaults_on_first_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = SettingsService::new(db).get().await?;

    assert_eq!(settings.row.id, SETTINGS_ROW_ID);
    assert!(settings.gallery.is_empty());
    assert_eq!(settings.forum_categories, Some(Vec::new()));

    let dto = settings.into_dto();
    assert_eq!(dto.site_name, DEFAULT_SITE_NAME);
    assert_eq!(dto.email_settings.port, 587);
    assert!(dto.features.registration);
    assert!(!dto.integrations.discord.enabled);

    Ok(())
}

/// Tests that concurrent first reads never create two rows.
///
/// Expected: Ok for both callers, exactly one settings row
#[tokio::test]
async fn concurrent_reads_keep_single_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);
    let (a, b) = tokio::join!(service.get(), service.get());

    assert_eq!(a?.row.id, b?.row.id);
    assert_eq!(entity::prelude::SiteSettings::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the read includes gallery and forum children.
///
/// Expected: Ok with gallery images and categories with permissions
#[tokio::test]
async fn loads_gallery_and_forum_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, category, _) =
        factory::helpers::create_category_with_permission(db, "member").await?;
    let image = factory::create_gallery_image(db, settings.id, "hero.png").await?;

    let dto = SettingsService::new(db).get().await?.into_dto();

    assert_eq!(dto.gallery_images.len(), 1);
    assert_eq!(dto.gallery_images[0].id, Some(image.id));
    let categories = dto.forum_categories.unwrap();
    assert_eq!(categories[0].id, Some(category.id));
    assert_eq!(categories[0].permissions[0].role, "member");

    Ok(())
}
