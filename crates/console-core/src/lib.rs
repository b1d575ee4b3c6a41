//! Catalog Console Core
//!
//! Framework-agnostic pieces of the admin console:
//! - resource: schema descriptor shared by every resource kind
//! - models: typed product / pet records
//! - api: transport seam and REST client
//! - binding: UI seam (fields, buttons, status region, results table)
//! - controller: maps button actions to requests and renders outcomes

pub mod api;
pub mod binding;
pub mod controller;
pub mod error;
pub mod models;
pub mod query;
pub mod resource;
pub mod sequence;
pub mod table;

#[cfg(test)]
mod testing;

pub use api::{ApiRequest, ApiResponse, HealthStatus, Method, ResourceClient, Transport};
pub use binding::{Action, ActionHandler, FormBinding};
pub use controller::FormController;
pub use error::{ApiError, TransportError, ValidationError};
pub use models::{Pet, Product, Review, REVIEW_FIELDS};
pub use query::SearchFilter;
pub use resource::{FieldKind, FieldSpec, FormValues, Resource, SearchStyle};
pub use table::ResultsTable;
