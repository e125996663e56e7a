use super::*;

/// Tests the gallery diff against stored rows.
///
/// Starting from images A, B and C, submits A (changed) plus a new image D.
///
/// Expected: A updated in place, D inserted, B and C deleted
#[tokio::test]
async fn updates_kept_inserts_new_and_deletes_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let a = factory::create_gallery_image(db, settings.id, "a.png").await?;
    let b = factory::create_gallery_image(db, settings.id, "b.png").await?;
    let c = factory::create_gallery_image(db, settings.id, "c.png").await?;

    let repo = GalleryImageRepository::new(db);
    let outcome = diff_by_id(
        &repo,
        settings.id,
        &[image(Some(a.id), "a-edited.png", 0), image(None, "d.png", 1)],
    )
    .await?;

    assert_eq!(outcome.updated, vec![a.id]);
    assert_eq!(outcome.inserted.len(), 1);
    assert_eq!(outcome.deleted, vec![b.id, c.id]);

    let images = repo.get_by_settings_id(settings.id).await?;
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].id, a.id);
    assert_eq!(images[0].url, "a-edited.png");
    assert_eq!(images[1].id, outcome.inserted[0]);
    assert_eq!(images[1].url, "d.png");

    Ok(())
}

/// Tests that reconciling with the returned ids changes nothing.
///
/// Expected: second pass has zero inserts and zero deletes, ids stable
#[tokio::test]
async fn second_pass_with_returned_ids_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let repo = GalleryImageRepository::new(db);

    let first = diff_by_id(
        &repo,
        settings.id,
        &[image(None, "a.png", 0), image(None, "b.png", 1)],
    )
    .await?;
    let second = diff_by_id(
        &repo,
        settings.id,
        &[
            image(Some(first.ids[0]), "a.png", 0),
            image(Some(first.ids[1]), "b.png", 1),
        ],
    )
    .await?;

    assert!(second.inserted.is_empty());
    assert!(second.deleted.is_empty());
    assert_eq!(second.ids, first.ids);
    assert_eq!(repo.current_ids(settings.id).await?.len(), 2);

    Ok(())
}

/// Tests that an id the gallery does not own is inserted instead of failing.
///
/// Expected: Ok with a new row, no error
#[tokio::test]
async fn stale_id_becomes_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = factory::create_settings(db).await?;
    let repo = GalleryImageRepository::new(db);

    let outcome = diff_by_id(&repo, settings.id, &[image(Some(404), "x.png", 0)]).await?;

    assert_eq!(outcome.inserted.len(), 1);
    assert_ne!(outcome.inserted[0], 404);
    assert!(outcome.updated.is_empty());

    Ok(())
}
