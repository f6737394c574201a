pub mod domain;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    claims::{SessionClaims, SessionToken},
    email::Email,
    password::{Password, PasswordHash},
    user::{User, UserError},
    user_id::UserId,
    username::Username,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, SessionTokenService, TokenError},
};

pub use strategies::auth_validator::AuthValidator;
