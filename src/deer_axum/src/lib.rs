//! Axum integration for the deer authentication service.
//!
//! Route handlers are generic over the workflow's collaborators and take an
//! [`AuthWorkflow`](deer_application::AuthWorkflow) as router state. The
//! [`require_auth`](middleware::require_auth) middleware gates protected routes
//! on a bearer token.

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::{AuthApiError, ErrorResponse};
pub use middleware::require_auth;
