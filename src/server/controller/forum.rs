use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, forum::ForumCategoriesDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::forum::{ForumCategory, SyncForumCategoriesParams},
        service::forum::ForumCategoryService,
        state::AppState,
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

fn into_dto(categories: Vec<ForumCategory>) -> ForumCategoriesDto {
    ForumCategoriesDto {
        categories: categories.into_iter().map(ForumCategory::into_dto).collect(),
    }
}

/// Get all forum categories.
///
/// Returns categories ordered by sort order, each with its role permissions. Public.
///
/// # Returns
/// - `200 OK` - Category list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/forum/categories",
    tag = FORUM_TAG,
    responses(
        (status = 200, description = "Forum categories", body = ForumCategoriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forum_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = ForumCategoryService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dto(categories))))
}

/// Replace the forum categories.
///
/// The submitted list becomes the complete taxonomy. Categories with a known id are
/// updated, others inserted, missing ones deleted together with their permissions.
/// Each category's permissions are replaced by the submitted set.
///
/// # Access Control
/// - `Admin` - Only admins can change forum categories
///
/// # Returns
/// - `200 OK` - Stored category list
/// - `400 Bad Request` - Malformed body, empty name or duplicate role
/// - `401 Unauthorized` - User not authenticated or not an admin
/// - `500 Internal Server Error` - Write rolled back
#[utoipa::path(
    put,
    path = "/api/forum/categories",
    tag = FORUM_TAG,
    request_body = ForumCategoriesDto,
    responses(
        (status = 200, description = "Forum categories saved", body = ForumCategoriesDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Failed to save forum categories", body = ErrorDto)
    ),
)]
pub async fn update_forum_categories(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ForumCategoriesDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = SyncForumCategoriesParams::from_dto(payload)?;

    let categories = ForumCategoryService::new(&state.db).sync(params).await?;

    Ok((StatusCode::OK, Json(into_dto(categories))))
}
