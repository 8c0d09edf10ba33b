//! Response envelope for the listing endpoint.

use crate::model::{Client, ClientPage, PageRequest};
use serde::{Deserialize, Serialize};

/// `{data, page, limit, total}`. `total` counts the whole filtered set, not just `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageBody<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

pub fn page_body(req: &PageRequest, page: ClientPage) -> PageBody<Client> {
    PageBody {
        data: page.rows,
        page: req.page,
        limit: req.limit,
        total: page.total,
    }
}
