use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::{DateTime, Utc};
use deer_application::AuthWorkflow;
use deer_core::{PasswordHasher, SessionTokenService, UserStore};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::error::AuthApiError;

#[derive(Deserialize)]
pub struct VerifyTokenRequest {
    pub token: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Reports the identity carried by a session token, or 401 if it is not valid.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<U, H, T>(
    State(workflow): State<AuthWorkflow<U, H, T>>,
    request: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> Result<Json<VerifyTokenResponse>, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: SessionTokenService + Clone + 'static,
{
    let Json(request) = request?;

    let claims = workflow.validate_token(request.token.expose_secret())?;

    Ok(Json(VerifyTokenResponse {
        user_id: claims.user_id.to_string(),
        username: claims.username.to_string(),
        issued_at: claims.issued_at,
        expires_at: claims.expires_at,
    }))
}
