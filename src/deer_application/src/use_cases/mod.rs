pub mod get_user;
pub mod login;
pub mod register;

use std::time::Duration;

use deer_core::UserStoreError;

use crate::error::AuthError;

/// Run a store call, giving up after `limit`.
///
/// A call that does not finish in time is reported as [`AuthError::StoreUnavailable`].
pub(crate) async fn with_store_timeout<T, F>(limit: Duration, call: F) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, UserStoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(AuthError::from),
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Credential store call timed out");
            Err(AuthError::StoreUnavailable(format!(
                "store call exceeded {} ms",
                limit.as_millis()
            )))
        }
    }
}
