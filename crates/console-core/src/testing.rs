//! In-memory binding and scripted transports for tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{ApiRequest, ApiResponse, Transport};
use crate::binding::{Action, ActionFuture, ActionHandler, FormBinding};
use crate::error::TransportError;
use crate::table::ResultsTable;

#[derive(Default)]
pub struct MemoryBinding {
    pub fields: RefCell<HashMap<String, String>>,
    pub message: RefCell<String>,
    pub table: RefCell<Option<ResultsTable>>,
    handlers: RefCell<HashMap<Action, ActionHandler>>,
}

impl MemoryBinding {
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        let binding = Self::default();
        for (name, value) in fields {
            binding.set_field(name, value);
        }
        binding
    }

    pub fn field(&self, name: &str) -> String {
        self.get_field(name)
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Simulate a button click; `None` when nothing is registered
    pub fn click(&self, action: Action) -> Option<ActionFuture> {
        let handler = self.handlers.borrow().get(&action).cloned();
        handler.map(|handler| handler())
    }
}

impl FormBinding for MemoryBinding {
    fn get_field(&self, name: &str) -> String {
        self.fields.borrow().get(name).cloned().unwrap_or_default()
    }

    fn set_field(&self, name: &str, value: &str) {
        self.fields.borrow_mut().insert(name.to_string(), value.to_string());
    }

    fn flash_message(&self, message: &str) {
        *self.message.borrow_mut() = message.to_string();
    }

    fn render_table(&self, table: &ResultsTable) {
        *self.table.borrow_mut() = Some(table.clone());
    }

    fn on_click(&self, action: Action, handler: ActionHandler) {
        self.handlers.borrow_mut().insert(action, handler);
    }
}

/// Replies from a fixed script and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, reason: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(TransportError(reason.to_string())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_string())))
    }
}

/// Each request waits on the next gate; tests release gates in any order
#[derive(Default)]
pub struct GatedTransport {
    gates: RefCell<VecDeque<oneshot::Receiver<ApiResponse>>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> oneshot::Sender<ApiResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.map_err(|_| TransportError("gate dropped".to_string())),
            None => Err(TransportError("no gate".to_string())),
        }
    }
}
