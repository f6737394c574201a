use std::time::Duration;

use deer_core::{Email, Password, PasswordHasher, User, UserStore};

use crate::{error::AuthError, use_cases::with_store_timeout};

/// Login use case - verifies a user's credentials
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
    store_timeout: Duration,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, store_timeout: Duration) -> Self {
        Self {
            user_store,
            password_hasher,
            store_timeout,
        }
    }

    /// Execute the login use case
    ///
    /// An unknown email and a wrong password both fail with
    /// `AuthError::InvalidCredentials`, so callers cannot tell which one it was.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, AuthError> {
        let lookup = self.user_store.get_user_by_email(&email);
        let user = match with_store_timeout(self.store_timeout, lookup).await {
            Ok(user) => user,
            Err(AuthError::NotFound) => {
                self.password_hasher.verify_unknown_user(&password).await;
                tracing::debug!("Login rejected: no user with this email");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        self.password_hasher
            .verify(user.password_hash(), &password)
            .await
            .inspect_err(|e| tracing::debug!(user_id = %user.id(), "Login rejected: {e}"))?;

        Ok(user)
    }
}
