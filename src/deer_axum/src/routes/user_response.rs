use deer_core::User;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Public view of a user. The password hash has no field here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            username: user.username().to_string(),
            user_email: user.email().as_ref().expose_secret().clone(),
        }
    }
}
