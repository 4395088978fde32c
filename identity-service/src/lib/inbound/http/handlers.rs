use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::identity::errors::AuthError;

pub mod health;
pub mod login;
pub mod me;
pub mod register;

/// Client-facing errors of the auth API.
///
/// The response bodies are part of the external contract: credential
/// failures and token rejections are deliberately generic, validation and
/// conflict messages are specific because they reveal no secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    AuthenticationFailed,
    RegistrationConflict,
    Unauthenticated,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Validation Error", message),
            ),
            ApiError::AuthenticationFailed => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Authentication Failed", "Invalid username or password"),
            ),
            ApiError::RegistrationConflict => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("Registration Failed", "Username already exists"),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Unauthorized", "Not authenticated"),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Internal Error", "An unexpected error occurred"),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidUsername(_) | AuthError::PasswordTooShort { .. } => {
                ApiError::Validation(err.to_string())
            }
            AuthError::UsernameTaken(_) => ApiError::RegistrationConflict,
            AuthError::InvalidCredentials => ApiError::AuthenticationFailed,
            AuthError::InvalidClaims(_) => ApiError::Unauthenticated,
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Database(_) => {
                // Detail stays server-side; the client sees a generic 500.
                tracing::error!(error = %err, "internal error");
                ApiError::Internal
            }
        }
    }
}
