//! Runtime settings read from the environment.

use serde::Deserialize;

/// Settings for the server. Each field maps to the upper-cased env var (`PORT`, `DB_HOST`, ...).
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Listen address; `BIND_HOST` rather than `HOST`, which some shells set to the machine name.
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Full connection URL. When set, the `db_*` parts are ignored.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_db_host")]
    pub db_host: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    #[serde(default = "default_db_user")]
    pub db_user: String,
    #[serde(default)]
    pub db_password: String,
    #[serde(default = "default_db_name")]
    pub db_name: String,
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection. Unset keeps the sqlx default.
    #[serde(default)]
    pub db_acquire_timeout_secs: Option<u64>,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

fn default_bind_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_db_host() -> String {
    "localhost".into()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".into()
}

fn default_db_name() -> String {
    "clientes".into()
}

fn default_max_connections() -> u32 {
    10
}

fn default_public_dir() -> String {
    "public".into()
}

fn default_page_size() -> i64 {
    crate::model::DEFAULT_PAGE_SIZE
}
