//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the `clientes` table.

use crate::model::{ClientChanges, ClientField, PageRequest};
use crate::sql::BindValue;

pub const TABLE: &str = "clientes";

/// Column list returned by every statement, in `Client` field order.
pub const COLUMNS: &str = "id, name, email, phone, company, title, topics, created_at, updated_at";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Escape LIKE metacharacters so the term matches literally. Backslash is the Postgres default escape.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// WHERE clause for the search term: one bound pattern, ILIKE against every textual column.
fn where_clause(q: &mut QueryBuf, term: Option<&str>) -> String {
    let Some(term) = term else {
        return String::new();
    };
    let pattern = format!("%{}%", escape_like(term));
    let n = q.push_param(BindValue::Text(Some(pattern)));
    let parts: Vec<String> = ClientField::ALL
        .iter()
        .map(|f| format!("{} ILIKE ${}", f.column(), n))
        .collect();
    format!(" WHERE ({})", parts.join(" OR "))
}

/// One page, newest first, with the filtered total as a window aggregate on every row.
pub fn select_page(req: &PageRequest) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(&mut q, req.term.as_deref());
    let limit = q.push_param(BindValue::Int(req.limit));
    let offset = q.push_param(BindValue::Int(req.offset()));
    q.sql = format!(
        "SELECT {}, COUNT(*) OVER() AS total FROM {}{} ORDER BY id DESC LIMIT ${} OFFSET ${}",
        COLUMNS, TABLE, where_sql, limit, offset
    );
    q
}

/// COUNT(*) over the filtered set. Used when the requested page is past the end.
pub fn count(req: &PageRequest) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(&mut q, req.term.as_deref());
    q.sql = format!("SELECT COUNT(*) FROM {}{}", TABLE, where_sql);
    q
}

pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", COLUMNS, TABLE, n);
    q
}

/// INSERT the assigned columns; id and created_at come from column defaults.
pub fn insert(changes: &ClientChanges) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (field, value) in changes.iter() {
        let n = q.push_param(BindValue::Text(value.map(str::to_string)));
        cols.push(field.column());
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        TABLE,
        cols.join(", "),
        placeholders.join(", "),
        COLUMNS
    );
    q
}

/// UPDATE by id: SET only the assigned columns, always stamping updated_at.
pub fn update(id: i64, changes: &ClientChanges) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (field, value) in changes.iter() {
        let n = q.push_param(BindValue::Text(value.map(str::to_string)));
        sets.push(format!("{} = ${}", field.column(), n));
    }
    sets.push("updated_at = NOW()".to_string());
    let id_param = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        TABLE,
        sets.join(", "),
        id_param,
        COLUMNS
    );
    q
}

/// DELETE by id, returning the id so a miss is distinguishable.
pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE id = ${} RETURNING id", TABLE, n);
    q
}
