//! Server binary: reads config from env, prepares the database, serves the API and the static UI.

use clientes::{
    app, connect_pool, ensure_database_exists, ensure_tables, AppConfig, AppState, PgClientRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clientes=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let opts = config.connect_options()?;
    ensure_database_exists(&opts).await?;
    let pool = connect_pool(&config, opts).await?;
    ensure_tables(&pool).await?;

    let repo = Arc::new(PgClientRepository::new(pool));
    let state = AppState::new(repo, config.default_page_size);
    let router = app(state, &config.public_dir);

    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
