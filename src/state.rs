//! Shared application state for all routes.

use crate::service::ClientRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ClientRepository>,
    /// `limit` applied when a listing request omits it.
    pub default_page_size: i64,
}

impl AppState {
    pub fn new(repo: Arc<dyn ClientRepository>, default_page_size: i64) -> Self {
        AppState {
            repo,
            default_page_size,
        }
    }
}
