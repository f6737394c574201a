//! Axum route handlers.
//!
//! Each handler parses its request into domain value types, calls the
//! [`AuthWorkflow`](deer_application::AuthWorkflow) held as router state, and
//! maps failures through [`AuthApiError`](crate::AuthApiError).

pub mod login;
pub mod ping;
pub mod profile;
pub mod register;
pub mod user_response;
pub mod verify_token;

pub use login::{LoginRequest, LoginResponse, login};
pub use ping::ping;
pub use profile::profile;
pub use register::{RegisterRequest, register};
pub use user_response::UserResponse;
pub use verify_token::{VerifyTokenRequest, VerifyTokenResponse, verify_token};
