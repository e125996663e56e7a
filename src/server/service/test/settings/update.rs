use super::*;

/// Tests the partial-update rule.
///
/// Writing one namespace must leave every other namespace exactly as stored.
///
/// Expected: Ok, only colors changed
#[tokio::test]
async fn untouched_namespaces_keep_their_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_settings(db).await?;
    let service = SettingsService::new(db);
    let before = service.get().await?.into_dto();

    let colors = ColorsDto {
        primary: "#ff0000".to_string(),
        ..before.colors.clone()
    };
    let after = service
        .update(params(UpdateSiteSettingsDto {
            colors: Some(colors.clone()),
            ..Default::default()
        }))
        .await?
        .into_dto();

    assert_eq!(after.colors, colors);
    assert_eq!(after.integrations, before.integrations);
    assert_eq!(after.email_settings, before.email_settings);
    assert_eq!(after.social_links, before.social_links);
    assert_eq!(after.features, before.features);
    assert_eq!(after.seo, before.seo);
    assert_eq!(after.site_name, before.site_name);

    Ok(())
}

/// Tests a write against an empty database.
///
/// Expected: Ok, row created with defaults then patched
#[tokio::test]
async fn creates_row_before_first_write() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = SettingsService::new(db)
        .update(params(UpdateSiteSettingsDto {
            hero_title: Some("Hello".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(settings.row.hero_title.as_deref(), Some("Hello"));
    assert_eq!(settings.row.site_name.as_deref(), Some(DEFAULT_SITE_NAME));
    assert_eq!(entity::prelude::SiteSettings::find().count(db).await?, 1);

    Ok(())
}

/// Tests gallery reconciliation through a settings write.
///
/// Starting from images A, B and C, submits A plus a new image D.
///
/// Expected: gallery is exactly A then D; A keeps its id
#[tokio::test]
async fn reconciles_gallery_to_submitted_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let a = factory::create_gallery_image(db, settings.id, "a.png").await?;
    factory::create_gallery_image(db, settings.id, "b.png").await?;
    factory::create_gallery_image(db, settings.id, "c.png").await?;

    let dto = SettingsService::new(db)
        .update(params(UpdateSiteSettingsDto {
            gallery_images: Some(vec![
                gallery_image(Some(a.id), "a.png"),
                gallery_image(None, "d.png"),
            ]),
            ..Default::default()
        }))
        .await?
        .into_dto();

    let urls: Vec<&str> = dto.gallery_images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["a.png", "d.png"]);
    assert_eq!(dto.gallery_images[0].id, Some(a.id));
    assert_eq!(entity::prelude::GalleryImage::find().count(db).await?, 2);

    Ok(())
}

/// Tests that a write without a gallery list leaves the gallery alone.
///
/// Expected: Ok, existing image still present
#[tokio::test]
async fn absent_gallery_is_not_touched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    factory::create_gallery_image(db, settings.id, "keep.png").await?;

    let updated = SettingsService::new(db)
        .update(params(UpdateSiteSettingsDto {
            site_name: Some("Renamed".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(updated.gallery.len(), 1);
    assert_eq!(updated.gallery[0].url, "keep.png");

    Ok(())
}

/// Tests atomicity of a settings write.
///
/// A trigger aborts the gallery insert; the scalar change made earlier in the same
/// transaction must not survive.
///
/// Expected: Err(SaveFailed), stored settings unchanged
#[tokio::test]
async fn failed_gallery_write_rolls_back_scalars() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    db.execute_unprepared(
        "CREATE TRIGGER gallery_fault BEFORE INSERT ON gallery_image \
         WHEN NEW.url = 'explode' BEGIN SELECT RAISE(ABORT, 'simulated fault'); END;",
    )
    .await?;

    let result = SettingsService::new(db)
        .update(params(UpdateSiteSettingsDto {
            site_name: Some("Should not stick".to_string()),
            gallery_images: Some(vec![gallery_image(None, "explode")]),
            ..Default::default()
        }))
        .await;

    assert!(matches!(result, Err(AppError::SaveFailed(msg)) if msg == "Failed to save settings"));
    let stored = entity::prelude::SiteSettings::find_by_id(settings.id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("settings".to_string()))?;
    assert_eq!(stored.site_name, settings.site_name);
    assert_eq!(stored.updated_at, settings.updated_at);

    Ok(())
}

/// Tests that concurrent writers are not detected.
///
/// Two writes of the same field both succeed; the later one is what remains.
///
/// Expected: Ok for both, last-write-wins, no conflict error
#[tokio::test]
async fn last_write_wins_without_conflict_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_forum_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);
    let first = service
        .update(params(UpdateSiteSettingsDto {
            site_name: Some("First".to_string()),
            ..Default::default()
        }))
        .await;
    let second = service
        .update(params(UpdateSiteSettingsDto {
            site_name: Some("Second".to_string()),
            ..Default::default()
        }))
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(
        service.get().await?.row.site_name.as_deref(),
        Some("Second")
    );

    Ok(())
}
