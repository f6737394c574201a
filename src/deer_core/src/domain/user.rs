use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{email::Email, password::PasswordHash, user_id::UserId, username::Username};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password: {0}")]
    InvalidPassword(&'static str),
    #[error("Invalid user id")]
    InvalidUserId,
}

/// A registered account.
///
/// The password hash is only reachable through [`User::password_hash`] and is
/// never serialized; outward payloads are built from the other fields.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh record with a new identifier and the current timestamp.
    pub fn new(username: Username, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a record that was read back from a store.
    pub fn from_parts(
        id: UserId,
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
