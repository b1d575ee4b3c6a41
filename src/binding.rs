//! Signal Binding
//!
//! `FormBinding` over Leptos signals: one `RwSignal` per form field plus the
//! status and results regions. Click handlers live in a local stored value.

use std::collections::HashMap;

use console_core::{Action, ActionHandler, FieldSpec, FormBinding, ResultsTable};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SignalBinding {
    fields: StoredValue<HashMap<&'static str, RwSignal<String>>>,
    message: RwSignal<String>,
    results: RwSignal<Option<ResultsTable>>,
    handlers: StoredValue<HashMap<Action, ActionHandler>, LocalStorage>,
}

impl SignalBinding {
    pub fn new(fields: &[FieldSpec]) -> Self {
        let fields = fields
            .iter()
            .map(|field| (field.name, RwSignal::new(String::new())))
            .collect();
        Self {
            fields: StoredValue::new(fields),
            message: RwSignal::new(String::new()),
            results: RwSignal::new(None),
            handlers: StoredValue::new_local(HashMap::new()),
        }
    }

    pub fn field(&self, name: &str) -> Option<RwSignal<String>> {
        self.fields.with_value(|fields| fields.get(name).copied())
    }

    pub fn message(&self) -> RwSignal<String> {
        self.message
    }

    pub fn results(&self) -> RwSignal<Option<ResultsTable>> {
        self.results
    }

    /// Run the handler registered for `action` on the local executor
    pub fn trigger(&self, action: Action) {
        let handler = self.handlers.with_value(|handlers| handlers.get(&action).cloned());
        match handler {
            Some(handler) => spawn_local(handler()),
            None => log::warn!(target: "binding", "no handler for {}", action.button_id()),
        }
    }
}

impl FormBinding for SignalBinding {
    fn get_field(&self, name: &str) -> String {
        self.field(name).map(|value| value.get_untracked()).unwrap_or_default()
    }

    fn set_field(&self, name: &str, value: &str) {
        if let Some(field) = self.field(name) {
            field.set(value.to_string());
        }
    }

    fn flash_message(&self, message: &str) {
        self.message.set(message.to_string());
    }

    fn render_table(&self, table: &ResultsTable) {
        self.results.set(Some(table.clone()));
    }

    fn on_click(&self, action: Action, handler: ActionHandler) {
        self.handlers.update_value(|handlers| {
            handlers.insert(action, handler);
        });
    }
}
