use chrono::{DateTime, Utc};
use deer_core::{
    SessionClaims, SessionToken, SessionTokenService, TokenError, User, UserId, Username,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Lifetime of a session token: 24 hours.
pub const DEFAULT_TOKEN_TTL_IN_SECONDS: i64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_in_seconds: DEFAULT_TOKEN_TTL_IN_SECONDS,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }

    fn has_secret(&self) -> bool {
        !self.jwt_secret.expose_secret().is_empty()
    }
}

/// Wire format of the token payload. `sub` repeats the user id as the registered claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub user_id: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaims {
    fn from_session_claims(claims: &SessionClaims) -> Self {
        let user_id = claims.user_id.to_string();
        Self {
            sub: user_id.clone(),
            user_id,
            username: claims.username.to_string(),
            iat: claims.issued_at.timestamp(),
            exp: claims.expires_at.timestamp(),
        }
    }

    fn into_session_claims(self) -> Result<SessionClaims, TokenError> {
        let invalid = |what: &str| TokenError::InvalidToken(format!("bad {what} claim"));

        let user_id = UserId::parse(&self.user_id).map_err(|_| invalid("user_id"))?;
        if self.sub != self.user_id {
            return Err(invalid("sub"));
        }

        Ok(SessionClaims {
            user_id,
            username: Username::parse(self.username).map_err(|_| invalid("username"))?,
            issued_at: DateTime::from_timestamp(self.iat, 0).ok_or_else(|| invalid("iat"))?,
            expires_at: DateTime::from_timestamp(self.exp, 0).ok_or_else(|| invalid("exp"))?,
        })
    }
}

/// HS256 session tokens signed with a server-held secret.
#[derive(Clone)]
pub struct JwtSessionTokens {
    config: JwtConfig,
}

impl JwtSessionTokens {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_token_at(
        &self,
        user: &User,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, TokenError> {
        if !self.config.has_secret() {
            return Err(TokenError::SigningFailure(
                "JWT secret is not configured".to_string(),
            ));
        }

        let ttl = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            TokenError::SigningFailure("Failed to create auth token duration".to_string()),
        )?;

        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenError::SigningFailure(
                "Duration out of range".to_string(),
            ))?;

        let claims = JwtClaims::from_session_claims(&SessionClaims::for_user(
            user, issued_at, expires_at,
        ));

        create_token(&claims, self.config.as_bytes()).map(SessionToken::from)
    }
}

impl SessionTokenService for JwtSessionTokens {
    #[tracing::instrument(name = "JwtSessionTokens::issue_token", skip_all, fields(user_id = %user.id()))]
    fn issue_token(&self, user: &User) -> Result<SessionToken, TokenError> {
        self.issue_token_at(user, Utc::now())
    }

    #[tracing::instrument(name = "JwtSessionTokens::validate_token", skip_all)]
    fn validate_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        if !self.config.has_secret() {
            return Err(TokenError::InvalidToken(
                "JWT secret is not configured".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        let claims = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        claims.into_session_claims()
    }
}

// Create JWT by encoding claims using the JWT secret
fn create_token(claims: &JwtClaims, secret: &[u8]) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::SigningFailure(e.to_string()))
}
