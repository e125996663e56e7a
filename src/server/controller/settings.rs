use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SettingsUpdatedDto},
        settings::{SiteSettingsDto, UpdateSiteSettingsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::settings::UpdateSettingsParams,
        service::settings::SettingsService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get the site settings.
///
/// Returns the full nested settings document including gallery images and forum
/// categories. The settings row is created with defaults on first access. Public.
///
/// # Returns
/// - `200 OK` - Settings document
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Site settings", body = SiteSettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = SettingsService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

/// Update the site settings.
///
/// Writes the namespaces present in the body. A `galleryImages` array replaces the
/// gallery: images with a known id are updated, others inserted, missing ones deleted.
///
/// # Access Control
/// - `Admin` - Only admins can change settings
///
/// # Returns
/// - `200 OK` - Settings saved, with the stored document
/// - `400 Bad Request` - Malformed body or gallery image without url
/// - `401 Unauthorized` - User not authenticated or not an admin
/// - `500 Internal Server Error` - Write rolled back
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = UpdateSiteSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = SettingsUpdatedDto),
        (status = 400, description = "Invalid settings data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Failed to save settings", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdateSiteSettingsDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = UpdateSettingsParams::from_dto(payload)?;

    let settings = SettingsService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(SettingsUpdatedDto {
            message: "Settings updated successfully".to_string(),
            settings: settings.into_dto(),
        }),
    ))
}
