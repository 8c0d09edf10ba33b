//! Browser view controller as a pure state machine.
//!
//! `public/js/main.js` drives the DOM with the same transitions. Here the controller
//! consumes [`Event`]s (user actions and API replies) and emits [`Command`]s (API
//! calls and UI side effects) without doing any I/O itself.

use crate::model::{Client, ClientDraft, ClientField};
use crate::response::PageBody;

/// Page size the browser requests.
pub const UI_PAGE_SIZE: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Form,
}

/// Text inputs of the client form. Timestamps are read-only display values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub title: String,
    pub topics: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ClientForm {
    fn from_client(c: &Client) -> Self {
        ClientForm {
            id: Some(c.id),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            company: c.company.clone().unwrap_or_default(),
            title: c.title.clone().unwrap_or_default(),
            topics: c.topics.clone().unwrap_or_default(),
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        }
    }

    fn field_mut(&mut self, field: ClientField) -> &mut String {
        match field {
            ClientField::Name => &mut self.name,
            ClientField::Email => &mut self.email,
            ClientField::Phone => &mut self.phone,
            ClientField::Company => &mut self.company,
            ClientField::Title => &mut self.title,
            ClientField::Topics => &mut self.topics,
        }
    }

    /// Every field is submitted, blank ones included, the way a form post does.
    fn to_draft(&self) -> ClientDraft {
        ClientDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            company: Some(self.company.clone()),
            title: Some(self.title.clone()),
            topics: Some(self.topics.clone()),
        }
    }

    /// Tagged submit: no id means create.
    pub fn to_request(&self) -> SubmitRequest {
        match self.id {
            Some(id) => SubmitRequest::Update {
                id,
                draft: self.to_draft(),
            },
            None => SubmitRequest::Create(self.to_draft()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRequest {
    Create(ClientDraft),
    Update { id: i64, draft: ClientDraft },
}

/// Row awaiting delete confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Init,
    OpenInsert,
    OpenEdit(i64),
    EditField(ClientField, String),
    Submit,
    Cancel,
    RequestDelete(i64),
    ConfirmDelete,
    CancelDelete,
    Search(String),
    NextPage,
    PrevPage,
    ListLoaded(PageBody<Client>),
    ListFailed(String),
    ClientLoaded(Client),
    ClientLoadFailed(String),
    /// The submit request finished, whatever its status.
    SubmitCompleted,
    DeleteSucceeded,
    DeleteFailed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchList { term: String, page: i64, limit: i64 },
    FetchClient(i64),
    Submit(SubmitRequest),
    Delete(i64),
    LogError(String),
    Alert(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub view: View,
    pub form_title: &'static str,
    pub form: ClientForm,
    pub term: String,
    pub page: i64,
    pub limit: i64,
    pub rows: Vec<Client>,
    pub total: i64,
    pub pending_delete: Option<DeleteTarget>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            view: View::List,
            form_title: "",
            form: ClientForm::default(),
            term: String::new(),
            page: 1,
            limit: UI_PAGE_SIZE,
            rows: Vec::new(),
            total: 0,
            pending_delete: None,
        }
    }
}

impl ViewState {
    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page.saturating_mul(self.limit) < self.total
    }

    pub fn modal_open(&self) -> bool {
        self.pending_delete.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn fetch_list(&self) -> Command {
        Command::FetchList {
            term: self.state.term.clone(),
            page: self.state.page,
            limit: self.state.limit,
        }
    }

    fn show_list(&mut self) {
        self.state.view = View::List;
    }

    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Init => {
                self.show_list();
                vec![self.fetch_list()]
            }
            Event::OpenInsert => {
                self.state.form = ClientForm::default();
                self.state.form_title = "New client";
                self.state.view = View::Form;
                vec![]
            }
            Event::OpenEdit(id) => vec![Command::FetchClient(id)],
            Event::ClientLoaded(client) => {
                self.state.form = ClientForm::from_client(&client);
                self.state.form_title = "Edit client";
                self.state.view = View::Form;
                vec![]
            }
            Event::ClientLoadFailed(msg) => vec![Command::LogError(msg)],
            Event::EditField(field, value) => {
                if self.state.view == View::Form {
                    *self.state.form.field_mut(field) = value;
                }
                vec![]
            }
            Event::Submit => {
                if self.state.view != View::Form {
                    return vec![];
                }
                vec![Command::Submit(self.state.form.to_request())]
            }
            Event::SubmitCompleted => {
                self.show_list();
                vec![self.fetch_list()]
            }
            Event::Cancel => {
                self.show_list();
                vec![]
            }
            Event::RequestDelete(id) => {
                let Some(row) = self.state.rows.iter().find(|c| c.id == id) else {
                    return vec![];
                };
                self.state.pending_delete = Some(DeleteTarget {
                    id: row.id,
                    name: row.name.clone(),
                });
                vec![]
            }
            Event::ConfirmDelete => match &self.state.pending_delete {
                Some(target) => vec![Command::Delete(target.id)],
                None => vec![],
            },
            Event::CancelDelete => {
                self.state.pending_delete = None;
                vec![]
            }
            Event::DeleteSucceeded => {
                self.state.pending_delete = None;
                vec![self.fetch_list()]
            }
            Event::DeleteFailed(msg) => vec![
                Command::LogError(msg),
                Command::Alert("Could not delete the client".into()),
            ],
            Event::Search(term) => {
                self.state.term = term;
                self.state.page = 1;
                vec![self.fetch_list()]
            }
            Event::NextPage => {
                if !self.state.next_enabled() {
                    return vec![];
                }
                self.state.page += 1;
                vec![self.fetch_list()]
            }
            Event::PrevPage => {
                if !self.state.prev_enabled() {
                    return vec![];
                }
                self.state.page -= 1;
                vec![self.fetch_list()]
            }
            Event::ListLoaded(body) => {
                self.state.rows = body.data;
                self.state.page = body.page;
                self.state.limit = body.limit;
                self.state.total = body.total;
                vec![]
            }
            Event::ListFailed(msg) => vec![Command::LogError(msg)],
        }
    }
}
