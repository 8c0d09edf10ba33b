//! Router assembly: API routes, operational routes, static UI fallback, and middleware.

mod clients;
mod common;

pub use clients::{client_routes, CLIENTS_PATH};
pub use common::common_routes;

use crate::state::AppState;
use axum::http::{header, HeaderName, Method};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Request bodies larger than this are rejected with 413, whether or not `Content-Length` is sent.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

/// Full application: `/api/clientes`, `/health`, `/ready`, `/version`, and static files from `public_dir`.
pub fn app(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(client_routes(state))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
