//! Client record, editable field set, and list paging parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound for `limit` on the listing endpoint.
pub const MAX_PAGE_SIZE: i64 = 100;
/// `limit` used when the query omits it or sends something unparseable.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// One row of the `clientes` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub topics: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable columns, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientField {
    Name,
    Email,
    Phone,
    Company,
    Title,
    Topics,
}

impl ClientField {
    pub const ALL: [ClientField; 6] = [
        ClientField::Name,
        ClientField::Email,
        ClientField::Phone,
        ClientField::Company,
        ClientField::Title,
        ClientField::Topics,
    ];

    pub fn column(self) -> &'static str {
        match self {
            ClientField::Name => "name",
            ClientField::Email => "email",
            ClientField::Phone => "phone",
            ClientField::Company => "company",
            ClientField::Title => "title",
            ClientField::Topics => "topics",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, ClientField::Name | ClientField::Email)
    }
}

/// Request body for create and update. A `None` field was not submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<String>,
}

impl ClientDraft {
    pub fn get(&self, field: ClientField) -> Option<&str> {
        match field {
            ClientField::Name => self.name.as_deref(),
            ClientField::Email => self.email.as_deref(),
            ClientField::Phone => self.phone.as_deref(),
            ClientField::Company => self.company.as_deref(),
            ClientField::Title => self.title.as_deref(),
            ClientField::Topics => self.topics.as_deref(),
        }
    }
}

/// Validated column assignments. `None` value means store NULL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientChanges {
    assignments: Vec<(ClientField, Option<String>)>,
}

impl ClientChanges {
    pub fn set(&mut self, field: ClientField, value: Option<String>) {
        self.assignments.retain(|(f, _)| *f != field);
        self.assignments.push((field, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClientField, Option<&str>)> {
        self.assignments.iter().map(|(f, v)| (*f, v.as_deref()))
    }

    pub fn get(&self, field: ClientField) -> Option<Option<&str>> {
        self.assignments
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }
}

/// Normalized listing request: trimmed term, 1-based page, clamped limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub term: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build from raw query-string pairs. Never fails: bad values fall back to defaults.
    pub fn from_query(params: &HashMap<String, String>, default_limit: i64) -> Self {
        let term = params
            .get("term")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let page = params
            .get("page")
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        let default_limit = default_limit.clamp(1, MAX_PAGE_SIZE);
        let limit = params
            .get("limit")
            .and_then(|l| l.trim().parse::<i64>().ok())
            .filter(|l| *l != 0)
            .map(|l| l.clamp(1, MAX_PAGE_SIZE))
            .unwrap_or(default_limit);
        PageRequest { term, page, limit }
    }

    /// A term holding NUL cannot occur in any TEXT column, so the page is empty.
    pub fn matches_nothing(&self) -> bool {
        self.term.as_deref().is_some_and(|t| t.contains('\0'))
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// One page of rows plus the size of the whole filtered set.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientPage {
    pub rows: Vec<Client>,
    pub total: i64,
}
