//! Database bootstrap: create the database if missing, open the pool, create the `clientes` table.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::time::Duration;

/// Maintenance database used to create the application database.
const ADMIN_DATABASE: &str = "postgres";

/// Create the target database when it does not exist. No-op when the target is the maintenance DB.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), AppError> {
    let Some(db_name) = opts.get_database().map(str::to_string) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == ADMIN_DATABASE {
        return Ok(());
    }
    let mut conn = opts.clone().database(ADMIN_DATABASE).connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Pool bounded by `DB_MAX_CONNECTIONS`, optionally with `DB_ACQUIRE_TIMEOUT_SECS`.
pub async fn connect_pool(config: &AppConfig, opts: PgConnectOptions) -> Result<PgPool, AppError> {
    let mut pool_opts = PgPoolOptions::new().max_connections(config.db_max_connections);
    if let Some(secs) = config.db_acquire_timeout_secs {
        pool_opts = pool_opts.acquire_timeout(Duration::from_secs(secs));
    }
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(max_connections = config.db_max_connections, "database pool ready");
    Ok(pool)
}

/// Create the `clientes` table if it does not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            company TEXT,
            title TEXT,
            topics TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        )
        "#,
        crate::sql::TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
