//! UI Components
//!
//! Leptos components for the console page.

mod action_bar;
mod field_input;
mod flash_message;
mod health_badge;
mod review_form;
mod search_results;

pub use action_bar::ActionBar;
pub use field_input::FieldInput;
pub use flash_message::FlashMessage;
pub use health_badge::HealthBadge;
pub use review_form::ReviewForm;
pub use search_results::SearchResults;
