use super::*;
use crate::{model::settings::UpdateSiteSettingsDto, server::model::settings::to_flat};
use chrono::Utc;
use sea_orm::IntoActiveModel;

/// Tests a partial update through the translator.
///
/// Verifies that only the columns of the submitted namespace change.
///
/// Expected: Ok with new site name, every other column unchanged
#[tokio::test]
async fn writes_only_changed_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_settings(db).await?;
    let patch = UpdateSiteSettingsDto {
        site_name: Some("Renamed".to_string()),
        ..Default::default()
    };

    let repo = SiteSettingsRepository::new(db);
    let updated = repo.update(to_flat(&patch, Some(&stored), Utc::now())).await?;

    assert_eq!(updated.site_name.as_deref(), Some("Renamed"));
    assert!(updated.updated_at > stored.updated_at);
    assert_eq!(updated.created_at, stored.created_at);
    assert_eq!(
        entity::site_settings::Model {
            site_name: stored.site_name.clone(),
            updated_at: stored.updated_at,
            ..updated.clone()
        },
        stored
    );

    Ok(())
}

/// Tests updating when no settings row exists.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_when_row_is_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut row = fixture::site_settings::entity().into_active_model();
    row.site_name = sea_orm::ActiveValue::Set(Some("Ghost".to_string()));

    let result = SiteSettingsRepository::new(db).update(row).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
