use deer_core::{PasswordHasherError, TokenError, UserStoreError};
use thiserror::Error;

/// Failures surfaced by the auth workflow.
///
/// All of these are recoverable at the HTTP boundary. The payloads of the
/// infrastructure variants are meant for logs, not for clients.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User already exists")]
    DuplicateUser,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("User not found")]
    NotFound,
    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),
    #[error("Token signing failed: {0}")]
    SigningFailure(String),
}

impl From<UserStoreError> for AuthError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AuthError::DuplicateUser,
            UserStoreError::UserNotFound => AuthError::NotFound,
            UserStoreError::UnexpectedError(e) => AuthError::StoreUnavailable(e),
        }
    }
}

impl From<PasswordHasherError> for AuthError {
    fn from(error: PasswordHasherError) -> Self {
        match error {
            PasswordHasherError::Mismatch => AuthError::InvalidCredentials,
            PasswordHasherError::HashingFailure(e) => AuthError::HashingFailure(e),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::SigningFailure(e) => AuthError::SigningFailure(e),
            TokenError::InvalidToken(e) => AuthError::InvalidToken(e),
        }
    }
}
