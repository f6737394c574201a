use axum::{Extension, Json, extract::State};
use deer_application::AuthWorkflow;
use deer_core::{PasswordHasher, SessionClaims, SessionTokenService, UserStore};

use crate::{error::AuthApiError, routes::UserResponse};

/// Returns the caller's own user record.
///
/// Expects [`require_auth`](crate::require_auth) to have put the token's
/// claims into the request extensions.
#[tracing::instrument(name = "Profile", skip_all)]
pub async fn profile<U, H, T>(
    State(workflow): State<AuthWorkflow<U, H, T>>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<UserResponse>, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: SessionTokenService + Clone + 'static,
{
    let user = workflow.get_user_by_id(claims.user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}
