use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{forum, settings},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Portal API", description = "Site configuration and forum taxonomy"),
    tags(
        (name = "settings", description = "Site settings document"),
        (name = "forum", description = "Forum categories and role permissions")
    )
)]
struct ApiDoc;

/// Builds the API routes and serves their OpenAPI document under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(settings::get_settings, settings::update_settings))
        .routes(routes!(
            forum::get_forum_categories,
            forum::update_forum_categories
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
