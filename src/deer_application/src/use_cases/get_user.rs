use std::time::Duration;

use deer_core::{User, UserId, UserStore};

use crate::{error::AuthError, use_cases::with_store_timeout};

/// Get-user use case - looks a user up by identifier
pub struct GetUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
    store_timeout: Duration,
}

impl<'a, U> GetUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U, store_timeout: Duration) -> Self {
        Self {
            user_store,
            store_timeout,
        }
    }

    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<User, AuthError> {
        with_store_timeout(self.store_timeout, self.user_store.get_user_by_id(&id)).await
    }
}
