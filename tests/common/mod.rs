#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use clientes::{
    app, AppError, AppState, Client, ClientChanges, ClientField, ClientPage, ClientRepository, PageRequest,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory stand-in for the `clientes` table.
#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<Vec<Client>>,
    next_id: Mutex<i64>,
}

fn assign(client: &mut Client, field: ClientField, value: Option<&str>) {
    let value = value.map(str::to_string);
    match field {
        ClientField::Name => client.name = value.unwrap_or_default(),
        ClientField::Email => client.email = value.unwrap_or_default(),
        ClientField::Phone => client.phone = value,
        ClientField::Company => client.company = value,
        ClientField::Title => client.title = value,
        ClientField::Topics => client.topics = value,
    }
}

fn matches_term(c: &Client, term: &str) -> bool {
    let needle = term.to_lowercase();
    [
        Some(c.name.as_str()),
        Some(c.email.as_str()),
        c.phone.as_deref(),
        c.company.as_deref(),
        c.title.as_deref(),
        c.topics.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|v| v.to_lowercase().contains(&needle))
}

#[async_trait]
impl ClientRepository for MemoryRepository {
    async fn list(&self, req: &PageRequest) -> Result<ClientPage, AppError> {
        if req.matches_nothing() {
            return Ok(ClientPage { rows: Vec::new(), total: 0 });
        }
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Client> = rows
            .iter()
            .filter(|c| req.term.as_deref().map_or(true, |t| matches_term(c, t)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        let total = matching.len() as i64;
        let rows = matching
            .into_iter()
            .skip(req.offset() as usize)
            .take(req.limit as usize)
            .collect();
        Ok(ClientPage { rows, total })
    }

    async fn get(&self, id: i64) -> Result<Option<Client>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, changes: &ClientChanges) -> Result<Client, AppError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let mut client = Client {
            id: *next,
            name: String::new(),
            email: String::new(),
            phone: None,
            company: None,
            title: None,
            topics: None,
            created_at: Utc::now(),
            updated_at: None,
        };
        for (field, value) in changes.iter() {
            assign(&mut client, field, value);
        }
        self.rows.lock().unwrap().push(client.clone());
        Ok(client)
    }

    async fn update(&self, id: i64, changes: &ClientChanges) -> Result<Option<Client>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(client) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        for (field, value) in changes.iter() {
            assign(client, field, value);
        }
        client.updated_at = Some(Utc::now());
        Ok(Some(client.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an unreachable database does.
pub struct FailingRepository;

#[async_trait]
impl ClientRepository for FailingRepository {
    async fn list(&self, _req: &PageRequest) -> Result<ClientPage, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: i64) -> Result<Option<Client>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _changes: &ClientChanges) -> Result<Client, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i64, _changes: &ClientChanges) -> Result<Option<Client>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn memory_app() -> Router {
    app(AppState::new(Arc::new(MemoryRepository::default()), 20), public_dir())
}

pub fn failing_app() -> Router {
    app(AppState::new(Arc::new(FailingRepository), 20), public_dir())
}

pub fn public_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/clientes",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
