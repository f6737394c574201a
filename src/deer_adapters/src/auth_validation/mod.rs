pub mod bearer_validator;
pub mod jwt;

pub use bearer_validator::{BearerTokenValidator, TokenAuthError, extract_bearer_token};
pub use jwt::{DEFAULT_TOKEN_TTL_IN_SECONDS, JwtClaims, JwtConfig, JwtSessionTokens};
