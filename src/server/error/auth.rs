use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    ///
    /// The caller is not logged in. Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the client should log in again.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged, never returned.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the attempted action for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `AccessDenied` → 403 Forbidden with a generic permission message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
