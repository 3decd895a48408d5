//! Database connection pool using OnceCell pattern.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::auth::AuthError;
use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Schema migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, AuthError> {
    POOL.get_or_try_init(|| async {
        let settings = Settings::new()?;
        tracing::info!(
            host = %settings.database.host,
            database = %settings.database.database,
            "Connecting to database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&settings.database.url())
            .await?;
        Ok::<_, AuthError>(pool)
    })
    .await
}
