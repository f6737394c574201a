use chrono::{DateTime, Utc};

use crate::domain::{user::User, user_id::UserId, username::Username};

/// Identity asserted by a session token, valid between `issued_at` and `expires_at`.
///
/// Claims are signed, not encrypted. Nothing confidential belongs here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub username: Username,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id(),
            username: user.username().clone(),
            issued_at,
            expires_at,
        }
    }
}

/// Compact signed session token handed to the client after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
