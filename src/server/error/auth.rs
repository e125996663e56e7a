use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session: the caller never logged in.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session refers to a user row that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required permission.
    ///
    /// # Fields
    /// - User id
    /// - Server-side description of what was attempted
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. The client message only distinguishes
/// "authentication required" from "admin access required"; details are logged at
/// debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Authentication required",
            Self::AccessDenied(_, _) => "Admin access required",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
