pub mod claims;
pub mod email;
pub mod password;
pub mod user;
pub mod user_id;
pub mod username;
