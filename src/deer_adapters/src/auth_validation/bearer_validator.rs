use async_trait::async_trait;
use deer_core::{AuthValidator, SessionClaims, SessionTokenService, TokenError};
use http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Malformed authorization header")]
    MalformedHeader,
    #[error("{0}")]
    InvalidToken(#[from] TokenError),
}

/// Validates `Authorization: Bearer <token>` headers against a session token service.
#[derive(Clone)]
pub struct BearerTokenValidator<T> {
    token_service: T,
}

impl<T> BearerTokenValidator<T> {
    pub fn new(token_service: T) -> Self {
        Self { token_service }
    }
}

#[async_trait]
impl<T: SessionTokenService + Clone + 'static> AuthValidator for BearerTokenValidator<T> {
    type Claims = SessionClaims;
    type RequestParts = Parts;
    type Error = TokenAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let token = extract_bearer_token(&parts.headers)?;

        Ok(self.token_service.validate_token(token)?)
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenAuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(TokenAuthError::MissingToken)?
        .to_str()
        .map_err(|_| TokenAuthError::MalformedHeader)?;

    if value.is_empty() {
        return Err(TokenAuthError::MissingToken);
    }

    match value.split(' ').collect::<Vec<_>>().as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(*token),
        _ => Err(TokenAuthError::MalformedHeader),
    }
}
