use async_trait::async_trait;

/// Trait for validating authentication tokens in middleware.
///
/// Validators extract authentication information from HTTP requests,
/// verify the session token, and produce claims for protected routes.
///
/// # Implementation Note
///
/// The validator receives `RequestParts` (headers, method, URI, extensions) rather
/// than the full `Request` to avoid issues with non-`Sync` request bodies.
/// This is sufficient since validators only need headers to extract tokens.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The claims extracted from a valid session token.
    ///
    /// These are attached to the request and made available to protected route handlers.
    type Claims: Clone + Send + Sync + 'static;

    /// The request parts type this validator operates on.
    ///
    /// Typically `http::request::Parts` containing headers, method, URI, etc.
    type RequestParts: Sync;

    /// Errors that can occur during validation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate authentication from the request parts.
    ///
    /// This method:
    /// 1. Extracts the token from request parts
    /// 2. Validates the token (signature, algorithm, expiration)
    /// 3. Returns the claims to be used by the route handler
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No authentication token is present
    /// - The token is malformed, expired or signed with another key
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
