use std::time::Duration;

use deer_core::{Email, Password, PasswordHasher, User, UserStore, Username};

use crate::{error::AuthError, use_cases::with_store_timeout};

/// Register use case - hashes the password and persists a new user
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    password_hasher: &'a H,
    store_timeout: Duration,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Validated password
    ///
    /// # Returns
    /// The stored user, or `DuplicateUser` if the username or email is taken
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, email, password))]
    pub async fn execute(
        &self,
        username: Username,
        email: Email,
        password: Password,
    ) -> Result<User, AuthError> {
        let password_hash = self.password_hasher.hash(password).await?;
        let user = User::new(username, email, password_hash);

        // The store rejects duplicates atomically, no existence pre-check here.
        with_store_timeout(self.store_timeout, self.user_store.add_user(user.clone())).await?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}
