use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use deer_application::AuthWorkflow;
use deer_core::{Email, Password, PasswordHasher, SessionTokenService, UserStore, Username};
use secrecy::Secret;
use serde::Deserialize;

use crate::{error::AuthApiError, routes::UserResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, T>(
    State(workflow): State<AuthWorkflow<U, H, T>>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: SessionTokenService + Clone + 'static,
{
    let Json(request) = request?;

    let username = Username::parse(request.username)?;
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let user = workflow.register(username, email, password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
