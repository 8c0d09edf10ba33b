//! HTTP handlers for client CRUD.

pub mod clients;
pub use clients::*;
