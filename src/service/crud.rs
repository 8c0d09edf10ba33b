//! Client CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::{Client, ClientChanges, ClientPage, PageRequest};
use crate::service::ClientRepository;
use crate::sql::{self, bind_all, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

/// List row: the client plus the window total.
#[derive(sqlx::FromRow)]
struct PageRow {
    #[sqlx(flatten)]
    client: Client,
    total: i64,
}

#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        PgClientRepository { pool }
    }

    async fn fetch_client(&self, q: &QueryBuf) -> Result<Option<Client>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let query = bind_all(sqlx::query_as::<_, Client>(&q.sql), &q.params);
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn fetch_count(&self, q: &QueryBuf) -> Result<i64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let query = bind_all(sqlx::query_as::<_, (i64,)>(&q.sql), &q.params);
        let (n,) = query.fetch_one(&self.pool).await?;
        Ok(n)
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn list(&self, req: &PageRequest) -> Result<ClientPage, AppError> {
        if req.matches_nothing() {
            return Ok(ClientPage { rows: Vec::new(), total: 0 });
        }
        let q = sql::select_page(req);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as::<_, PageRow>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        let total = match rows.first() {
            Some(row) => row.total,
            // Past the last page the window has no rows to carry the total.
            None if req.offset() > 0 => self.fetch_count(&sql::count(req)).await?,
            None => 0,
        };
        Ok(ClientPage {
            rows: rows.into_iter().map(|r| r.client).collect(),
            total,
        })
    }

    async fn get(&self, id: i64) -> Result<Option<Client>, AppError> {
        self.fetch_client(&sql::select_by_id(id)).await
    }

    async fn create(&self, changes: &ClientChanges) -> Result<Client, AppError> {
        let row = self.fetch_client(&sql::insert(changes)).await?;
        let client = row.ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(id = client.id, "client created");
        Ok(client)
    }

    async fn update(&self, id: i64, changes: &ClientChanges) -> Result<Option<Client>, AppError> {
        let row = self.fetch_client(&sql::update(id, changes)).await?;
        if row.is_some() {
            tracing::info!(id, fields = changes.len(), "client updated");
        }
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let deleted = bind_all(sqlx::query_as::<_, (i64,)>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        if deleted.is_some() {
            tracing::info!(id, "client deleted");
        }
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
