use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use deer_core::AuthValidator;

use crate::error::AuthApiError;

/// Rejects the request with 401 unless `V` accepts it, and otherwise makes the
/// validated claims available to the handler as an `Extension`.
///
/// ```ignore
/// let profile = Router::new()
///     .route("/user/profile", get(profile::<U, H, T>))
///     .route_layer(middleware::from_fn_with_state(validator, require_auth::<V>));
/// ```
#[tracing::instrument(name = "Require auth", skip_all)]
pub async fn require_auth<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Result<Response, AuthApiError>
where
    V: AuthValidator<RequestParts = Parts>,
{
    let (mut parts, body) = request.into_parts();

    let claims = validator.validate(&parts).await.map_err(|e| {
        tracing::debug!("Rejected request: {e}");
        AuthApiError::InvalidToken
    })?;

    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
