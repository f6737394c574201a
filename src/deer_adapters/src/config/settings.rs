use std::time::Duration;

use config::{Config, ConfigError, Environment, File, Map};
use deer_application::WorkflowConfig;
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    auth_validation::{DEFAULT_TOKEN_TTL_IN_SECONDS, JwtConfig},
    config::constants::{CONFIG_FILE, env, prod},
    hashing::Argon2Settings,
};

#[derive(Debug, Clone, Deserialize)]
pub struct DeerSettings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    pub password_hash: Argon2Settings,
    pub store_timeout_in_millis: u64,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    /// Token lifetime in seconds.
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
    pub connect_timeout_in_secs: u64,
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl DeerSettings {
    /// Load settings from `.env`, `config/settings.json` and `DEER__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(CONFIG_FILE, None)
    }

    /// Same as [`DeerSettings::load`] but reads the given file instead of the default one.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(path, None)
    }

    fn build(path: &str, env_source: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let environment = Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("auth.allowed_origins")
            .source(env_source);

        let password_hash = Argon2Settings::default();

        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("auth.jwt.secret", "")?
            .set_default("auth.jwt.time_to_live", DEFAULT_TOKEN_TTL_IN_SECONDS)?
            .set_default(
                "auth.password_hash.memory_cost_kib",
                i64::from(password_hash.memory_cost_kib),
            )?
            .set_default(
                "auth.password_hash.iterations",
                i64::from(password_hash.iterations),
            )?
            .set_default(
                "auth.password_hash.parallelism",
                i64::from(password_hash.parallelism),
            )?
            .set_default("auth.store_timeout_in_millis", 5000_i64)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?
            .set_default("postgres.url", prod::DATABASE_URL)?
            .set_default("postgres.max_connections", 5_i64)?
            .set_default("postgres.connect_timeout_in_secs", 5_i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            jwt_secret: self.auth.jwt.secret.clone(),
            token_ttl_in_seconds: self.auth.jwt.time_to_live,
        }
    }

    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            store_timeout: Duration::from_millis(self.auth.store_timeout_in_millis),
        }
    }

    /// `None` when no origin is configured, which disables CORS handling.
    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        let origins = &self.auth.allowed_origins;
        (!origins.is_empty()).then(|| origins.clone())
    }
}
