//! Load `AppConfig` from the process environment (and `.env`), derive connection options.

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::model::MAX_PAGE_SIZE;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

impl AppConfig {
    /// Read `.env` if present, then the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env::<AppConfig>()?.normalized())
    }

    /// Same as `from_env` over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, AppConfig>(vars)?.normalized())
    }

    fn normalized(mut self) -> Self {
        self.default_page_size = self.default_page_size.clamp(1, MAX_PAGE_SIZE);
        self.db_max_connections = self.db_max_connections.max(1);
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse()
            .map_err(|e| ConfigError::BindAddress(format!("{}: {}", addr, e)))
    }

    /// Connection options for the application database.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.is_empty()) {
            return PgConnectOptions::from_str(url).map_err(|e| ConfigError::DatabaseUrl(e.to_string()));
        }
        Ok(PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name))
    }
}
