use super::*;

/// Tests that images come back in display order.
///
/// Expected: Ok with images ordered by position
#[tokio::test]
async fn returns_images_ordered_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    factory::gallery_image::GalleryImageFactory::new(db, settings.id)
        .url("second.png")
        .position(1)
        .build()
        .await?;
    factory::gallery_image::GalleryImageFactory::new(db, settings.id)
        .url("first.png")
        .caption("First")
        .position(0)
        .build()
        .await?;

    let images = GalleryImageRepository::new(db)
        .get_by_settings_id(settings.id)
        .await?;

    let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["first.png", "second.png"]);
    assert_eq!(images[0].caption.as_deref(), Some("First"));

    Ok(())
}

/// Tests reading a gallery that has no images.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;

    let repo = GalleryImageRepository::new(db);

    assert!(repo.get_by_settings_id(settings.id).await?.is_empty());
    assert!(repo.current_ids(settings.id).await?.is_empty());

    Ok(())
}
