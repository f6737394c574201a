//! Hand-rolled port implementations shared by the use case tests.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::Utc;
use deer_core::{
    Email, Password, PasswordHash, PasswordHasher, PasswordHasherError, SessionClaims,
    SessionToken, SessionTokenService, TokenError, User, UserId, UserStore, UserStoreError,
    Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn username(raw: &str) -> Username {
    Username::parse(raw.to_owned()).unwrap()
}

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn stored_user(name: &str, address: &str, plaintext: &str) -> User {
    User::new(
        username(name),
        email(address),
        PasswordHash::new(Secret::from(format!("{}{plaintext}", FakeHasher::PREFIX))),
    )
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<Vec<User>>>,
    failing: bool,
}

impl MockUserStore {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            users: Arc::default(),
            failing: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn check_available(&self) -> Result<(), UserStoreError> {
        if self.failing {
            return Err(UserStoreError::UnexpectedError("connection refused".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.username() == user.username() || u.email() == user.email())
        {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.push(user);
        Ok(())
    }

    async fn get_user_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.check_available()?;
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.check_available()?;
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| &u.id() == id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

/// Store whose every call stalls for `delay`.
pub struct SlowUserStore {
    pub delay: Duration,
}

#[async_trait]
impl UserStore for SlowUserStore {
    async fn add_user(&self, _user: User) -> Result<(), UserStoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn get_user_by_email(&self, _email: &Email) -> Result<User, UserStoreError> {
        tokio::time::sleep(self.delay).await;
        Err(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, _id: &UserId) -> Result<User, UserStoreError> {
        tokio::time::sleep(self.delay).await;
        Err(UserStoreError::UserNotFound)
    }
}

/// Reversible stand-in for a real adaptive hash.
#[derive(Clone)]
pub struct FakeHasher;

impl FakeHasher {
    pub const PREFIX: &'static str = "fake$";
    /// Hashing this password fails.
    pub const POISON: &'static str = "poison";
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let plaintext = password.as_ref().expose_secret();
        if plaintext == Self::POISON {
            return Err(PasswordHasherError::HashingFailure("out of memory".to_owned()));
        }
        Ok(PasswordHash::new(Secret::from(format!(
            "{}{plaintext}",
            Self::PREFIX
        ))))
    }

    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let candidate = format!("{}{}", Self::PREFIX, candidate.as_ref().expose_secret());
        if expected.as_ref().expose_secret() == &candidate {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }

    async fn verify_unknown_user(&self, _candidate: &Password) {}
}

/// [`FakeHasher`] that counts every password comparison, real or dummy.
#[derive(Clone, Default)]
pub struct CountingHasher {
    comparisons: Arc<AtomicUsize>,
}

impl CountingHasher {
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        FakeHasher.hash(password).await
    }

    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        self.comparisons.fetch_add(1, Ordering::SeqCst);
        FakeHasher.verify(expected, candidate).await
    }

    async fn verify_unknown_user(&self, _candidate: &Password) {
        self.comparisons.fetch_add(1, Ordering::SeqCst);
    }
}

/// Token service that encodes the user id in the clear.
#[derive(Clone)]
pub struct FakeTokens {
    pub can_sign: bool,
}

impl SessionTokenService for FakeTokens {
    fn issue_token(&self, user: &User) -> Result<SessionToken, TokenError> {
        if !self.can_sign {
            return Err(TokenError::SigningFailure("missing secret".to_owned()));
        }
        Ok(SessionToken::from(format!("{}:{}", user.id(), user.username())))
    }

    fn validate_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let invalid = || TokenError::InvalidToken(token.to_owned());
        let (id, name) = token.split_once(':').ok_or_else(invalid)?;
        let now = Utc::now();
        Ok(SessionClaims {
            user_id: UserId::parse(id).map_err(|_| invalid())?,
            username: Username::parse(name.to_owned()).map_err(|_| invalid())?,
            issued_at: now,
            expires_at: now + chrono::Duration::hours(24),
        })
    }
}
