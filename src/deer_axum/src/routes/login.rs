use axum::{Json, extract::State, extract::rejection::JsonRejection};
use deer_application::AuthWorkflow;
use deer_core::{Email, Password, PasswordHasher, SessionTokenService, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{error::AuthApiError, routes::UserResponse};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State(workflow): State<AuthWorkflow<U, H, T>>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: SessionTokenService + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let user = workflow.login(email, password).await?;
    let token = workflow.issue_token(&user)?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(&user),
        token: token.into_string(),
    }))
}
