//! UI Binding
//!
//! What the controller needs from a page: named fields, a status region,
//! a results region and clickable buttons.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::table::ResultsTable;

/// Button actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Create,
        Action::Update,
        Action::Retrieve,
        Action::Delete,
        Action::Clear,
        Action::Search,
    ];

    /// DOM id of the button
    pub fn button_id(&self) -> &'static str {
        match self {
            Action::Create => "create-btn",
            Action::Update => "update-btn",
            Action::Retrieve => "retrieve-btn",
            Action::Delete => "delete-btn",
            Action::Clear => "clear-btn",
            Action::Search => "search-btn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Update => "Update",
            Action::Retrieve => "Retrieve",
            Action::Delete => "Delete",
            Action::Clear => "Clear",
            Action::Search => "Search",
        }
    }
}

/// Future produced by a click; the binding decides how to drive it
pub type ActionFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Click handler registered for one action
pub type ActionHandler = Rc<dyn Fn() -> ActionFuture>;

pub trait FormBinding {
    /// Current text of a field; unknown fields read as ""
    fn get_field(&self, name: &str) -> String;

    fn set_field(&self, name: &str, value: &str);

    /// Replace the status region contents
    fn flash_message(&self, message: &str);

    /// Clear and rebuild the results region
    fn render_table(&self, table: &ResultsTable);

    fn on_click(&self, action: Action, handler: ActionHandler);
}
