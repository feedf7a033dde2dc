use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request was made without logging in, or the session expired.
    #[error("No user in session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    ///
    /// # Fields
    /// - User id stored in the session
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username and password do not match a stored account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Authenticated user lacks the permission the endpoint requires.
    ///
    /// # Fields
    /// - User id of the requester
    /// - Description of the denied action, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details such as user ids and denied actions are logged at debug level and never returned
/// to the client.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, stale sessions and bad credentials
/// - 403 Forbidden - For authenticated users without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
