//! Client resource routes under `/api/clientes`.

use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const CLIENTS_PATH: &str = "/api/clientes";

pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route(CLIENTS_PATH, get(list).post(create))
        .route(
            &format!("{}/:id", CLIENTS_PATH),
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
