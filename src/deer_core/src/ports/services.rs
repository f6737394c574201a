use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    claims::{SessionClaims, SessionToken},
    password::{Password, PasswordHash},
    user::User,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Password hashing failed: {0}")]
    HashingFailure(String),
}

/// One-way adaptive password hashing.
///
/// `verify` must compare in constant time. `verify_unknown_user` must cost as
/// much as a failing `verify`, so a login for an absent account takes as long
/// as one with a wrong password.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError>;
    async fn verify_unknown_user(&self, candidate: &Password);
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailure(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Issues and verifies signed, time-bounded session tokens.
pub trait SessionTokenService: Send + Sync {
    fn issue_token(&self, user: &User) -> Result<SessionToken, TokenError>;
    fn validate_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
