use std::time::Duration;

use deer_core::{
    Email, Password, PasswordHasher, SessionClaims, SessionToken, SessionTokenService, User,
    UserId, UserStore, Username,
};

use crate::{
    error::AuthError,
    use_cases::{get_user::GetUserUseCase, login::LoginUseCase, register::RegisterUseCase},
};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only settings injected into the workflow at construction.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowConfig {
    /// Upper bound for every credential store call.
    pub store_timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

/// Entry point for registration, login and session handling.
///
/// The workflow owns its collaborators and holds no mutable state, so a clone
/// can be handed to every request handler.
#[derive(Clone)]
pub struct AuthWorkflow<U, H, T> {
    user_store: U,
    password_hasher: H,
    token_service: T,
    config: WorkflowConfig,
}

impl<U, H, T> AuthWorkflow<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: SessionTokenService,
{
    pub fn new(user_store: U, password_hasher: H, token_service: T, config: WorkflowConfig) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
            config,
        }
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }

    pub fn token_service(&self) -> &T {
        &self.token_service
    }

    pub async fn register(
        &self,
        username: Username,
        email: Email,
        password: Password,
    ) -> Result<User, AuthError> {
        RegisterUseCase::new(
            &self.user_store,
            &self.password_hasher,
            self.config.store_timeout,
        )
        .execute(username, email, password)
        .await
    }

    pub async fn login(&self, email: Email, password: Password) -> Result<User, AuthError> {
        LoginUseCase::new(
            &self.user_store,
            &self.password_hasher,
            self.config.store_timeout,
        )
        .execute(email, password)
        .await
    }

    #[tracing::instrument(name = "AuthWorkflow::issue_token", skip_all, fields(user_id = %user.id()))]
    pub fn issue_token(&self, user: &User) -> Result<SessionToken, AuthError> {
        self.token_service.issue_token(user).map_err(|e| {
            tracing::error!("Failed to issue session token: {e}");
            AuthError::from(e)
        })
    }

    #[tracing::instrument(name = "AuthWorkflow::validate_token", skip_all)]
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        self.token_service
            .validate_token(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, AuthError> {
        GetUserUseCase::new(&self.user_store, self.config.store_timeout)
            .execute(id)
            .await
    }
}
