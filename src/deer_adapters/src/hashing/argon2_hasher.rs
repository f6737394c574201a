use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use deer_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Argon2id cost parameters. Fixed for the lifetime of the service.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Argon2Settings {
    pub memory_cost_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Settings {
    fn default() -> Self {
        Self {
            memory_cost_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

const UNKNOWN_USER_PASSWORD: &str = "deer-unknown-user";

#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
    /// Hash with the configured cost, verified against when no account matches.
    unknown_user_hash: PasswordHash,
}

impl Argon2PasswordHasher {
    pub fn new(settings: Argon2Settings) -> Result<Self, PasswordHasherError> {
        let params = Params::new(
            settings.memory_cost_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))?;

        let salt = SaltString::generate(&mut OsRng);
        let unknown_user_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
            .hash_password(UNKNOWN_USER_PASSWORD.as_bytes(), &salt)
            .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
            .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))?;

        Ok(Self {
            params,
            unknown_user_hash,
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| PasswordHash::new(Secret::from(hash.to_string())))
                    .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let expected = expected.clone();
        let candidate = candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = password_hash::PasswordHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))?;

                match verifier.verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(()),
                    Err(password_hash::Error::Password) => Err(PasswordHasherError::Mismatch),
                    Err(e) => Err(PasswordHasherError::HashingFailure(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailure(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify against unknown user hash", skip_all)]
    async fn verify_unknown_user(&self, candidate: &Password) {
        if let Err(PasswordHasherError::HashingFailure(e)) =
            self.verify(&self.unknown_user_hash, candidate).await
        {
            tracing::warn!("Unknown user verification failed: {e}");
        }
    }
}
