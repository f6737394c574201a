use std::fmt;

use crate::domain::user::UserError;

pub const MAX_USERNAME_LENGTH: usize = 64;

/// Public handle chosen at registration. Unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(username: String) -> Result<Self, UserError> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(UserError::InvalidUsername("must not be empty"));
        }
        if trimmed.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UserError::InvalidUsername("must be at most 64 characters"));
        }
        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(UserError::InvalidUsername(
                "must not contain whitespace or control characters",
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(username: String) -> Result<Self, Self::Error> {
        Self::parse(username)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
