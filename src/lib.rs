//! Clientes: client/contact management REST API over PostgreSQL, plus the browser view controller.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Client, ClientChanges, ClientDraft, ClientField, ClientPage, PageRequest};
pub use response::PageBody;
pub use routes::{app, client_routes, common_routes, CLIENTS_PATH};
pub use service::{ClientRepository, PgClientRepository, RequestValidator};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists, ensure_tables};
pub use view::{Command, Event, SubmitRequest, View, ViewController, ViewState};
