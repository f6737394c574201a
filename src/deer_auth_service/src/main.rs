use color_eyre::eyre::{Result, WrapErr, bail};
use deer_adapters::{
    auth_validation::JwtSessionTokens, config::DeerSettings, hashing::Argon2PasswordHasher,
    persistence::PostgresUserStore,
};
use deer_application::AuthWorkflow;
use deer_auth_service::{AuthService, configure_postgresql};
use secrecy::ExposeSecret;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = DeerSettings::load().wrap_err("Failed to load configuration")?;
    if settings.auth.jwt.secret.expose_secret().is_empty() {
        bail!("DEER__AUTH__JWT__SECRET must be set");
    }

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&settings)
        .await
        .wrap_err("Failed to set up PostgreSQL")?;

    let user_store = PostgresUserStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher::new(settings.auth.password_hash)?;
    let token_service = JwtSessionTokens::new(settings.jwt_config());

    let workflow = AuthWorkflow::new(
        user_store,
        password_hasher,
        token_service,
        settings.workflow_config(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting deer auth service...");

    AuthService::new(workflow)
        .run_standalone(listener, settings.allowed_origins())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
