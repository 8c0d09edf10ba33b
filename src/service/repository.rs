//! Storage seam for client records.

use crate::error::AppError;
use crate::model::{Client, ClientChanges, ClientPage, PageRequest};
use async_trait::async_trait;

/// Persistence operations behind the HTTP handlers. Each call is one independent statement.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// One page of matching rows, newest first, plus the total number of matches.
    async fn list(&self, req: &PageRequest) -> Result<ClientPage, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Client>, AppError>;

    /// Insert and return the stored row with server-assigned id and timestamps.
    async fn create(&self, changes: &ClientChanges) -> Result<Client, AppError>;

    /// Apply changes to one row. `None` when no row has this id.
    async fn update(&self, id: i64, changes: &ClientChanges) -> Result<Option<Client>, AppError>;

    /// `false` when no row has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trip to the backing store, for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
