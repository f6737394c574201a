use secrecy::{ExposeSecret, Secret};

use crate::domain::user::UserError;

/// A plaintext password as supplied by the user.
///
/// Lives only long enough to be hashed or verified. Never serialized.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, UserError> {
        if password.expose_secret().is_empty() {
            return Err(UserError::InvalidPassword("must not be empty"));
        }

        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(password: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Adaptive hash of a password in PHC string format.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
