use std::time::Duration;

use deer_adapters::{config::DeerSettings, persistence::MIGRATOR};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to the configured PostgreSQL database and run pending migrations.
pub async fn configure_postgresql(settings: &DeerSettings) -> Result<PgPool, sqlx::Error> {
    let postgres = &settings.postgres;

    let pg_pool = get_postgres_pool(
        postgres.url.expose_secret(),
        postgres.max_connections,
        Duration::from_secs(postgres.connect_timeout_in_secs),
    )
    .await?;

    MIGRATOR.run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool.
///
/// `acquire_timeout` bounds both the initial connect and every later checkout.
pub async fn get_postgres_pool(
    url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(url)
        .await
}
