use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deer_application::AuthError;
use deer_core::UserError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::UserAlreadyExists => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::InvalidCredentials | AuthApiError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AuthApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            AuthApiError::UnexpectedError(ref e) => {
                tracing::error!("Request failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<JsonRejection> for AuthApiError {
    fn from(rejection: JsonRejection) -> Self {
        AuthApiError::InvalidInput(rejection.body_text())
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::DuplicateUser => AuthApiError::UserAlreadyExists,
            AuthError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthError::InvalidToken(_) => AuthApiError::InvalidToken,
            AuthError::NotFound => AuthApiError::UserNotFound,
            AuthError::StoreUnavailable(_)
            | AuthError::HashingFailure(_)
            | AuthError::SigningFailure(_) => AuthApiError::UnexpectedError(error.to_string()),
        }
    }
}
