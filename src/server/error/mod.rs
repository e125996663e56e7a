//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of the service. It wraps domain-specific errors
//! and implements `IntoResponse`, so handlers can return `Result<_, AppError>` and
//! every failure reaches the client as an `ErrorDto` JSON body.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// `RecordNotFound` and `RecordNotUpdated` become 404 Not Found; anything else
    /// results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Request body could not be parsed into the expected shape.
    ///
    /// Results in 400 Bad Request with the parser's reason.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// A write batch was rolled back.
    ///
    /// Results in 500 Internal Server Error carrying the provided message, which is
    /// deliberately generic ("Failed to save ..."). The underlying cause is logged
    /// where the transaction was rolled back, never sent to the client.
    #[error("{0}")]
    SaveFailed(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Whether this error means a targeted row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DbErr(DbErr::RecordNotFound(_)) | Self::DbErr(DbErr::RecordNotUpdated)
        )
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `JsonRejection`
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For not-found database errors
/// - 500 Internal Server Error - For `SaveFailed` (with its message) and all other
///   variants (with a generic message)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            tracing::debug!("Not found: {}", self);
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Record not found".to_string(),
                }),
            )
                .into_response();
        }

        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            Self::SaveFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                InternalServerError("Internal server error").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
