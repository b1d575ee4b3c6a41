//! Resource Schema Descriptor
//!
//! One parametric description per resource kind: which fields the form tracks,
//! where the collection lives, and how records map to form values and table rows.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};

/// How a form field behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Server-assigned identifier
    Id,
    /// Free text attribute
    Text,
    /// Boolean attribute held as "true" / "false"
    Flag,
    /// Search-only sort key with its allowed values
    Sort(&'static [&'static str]),
}

/// A single named input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key and form field name
    pub name: &'static str,
    /// Human label used in messages and the form
    pub label: &'static str,
    pub kind: FieldKind,
    /// Must be non-empty before a create request is sent
    pub required: bool,
    /// Contributes a filter to search queries
    pub searchable: bool,
}

impl FieldSpec {
    pub const fn id() -> Self {
        Self { name: "id", label: "ID", kind: FieldKind::Id, required: false, searchable: false }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, required: false, searchable: true }
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Flag, required: false, searchable: true }
    }

    pub const fn sort(options: &'static [&'static str]) -> Self {
        Self { name: "sort", label: "Sort", kind: FieldKind::Sort(options), required: false, searchable: true }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether the field mirrors a record attribute (everything but sort keys)
    pub fn is_record_field(&self) -> bool {
        !matches!(self.kind, FieldKind::Sort(_))
    }
}

/// How search values are normalized before they enter the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStyle {
    TrimLowercase,
    Raw,
}

impl SearchStyle {
    pub fn normalize(self, value: &str) -> String {
        match self {
            SearchStyle::TrimLowercase => value.trim().to_lowercase(),
            SearchStyle::Raw => value.to_string(),
        }
    }
}

/// Working copy of one record as text, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing fields read as the empty string
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Schema descriptor implemented by each resource record type
pub trait Resource: Serialize + DeserializeOwned + Clone + std::fmt::Debug + 'static {
    /// Collection path segment, e.g. "products"
    const COLLECTION: &'static str;
    /// Display name used in messages, e.g. "Product"
    const SINGULAR: &'static str;
    /// Every form field, in display order
    const FIELDS: &'static [FieldSpec];
    const SEARCH_STYLE: SearchStyle;
    const TABLE_HEADER: &'static [&'static str];

    fn id(&self) -> Option<u32>;

    /// Build the outgoing record from form text. The id is never carried in the body.
    fn from_form(form: &FormValues) -> Self;

    /// Text for every record field, id included
    fn to_form(&self) -> FormValues;

    /// One plain-text cell per `TABLE_HEADER` column
    fn table_row(&self) -> Vec<String>;

    fn collection_path() -> String {
        format!("/{}", Self::COLLECTION)
    }

    /// DOM id of a field's input, e.g. "product_name"
    fn input_id(field: &str) -> String {
        format!("{}_{}", Self::SINGULAR.to_lowercase(), field)
    }

    fn record_fields() -> impl Iterator<Item = &'static FieldSpec> {
        Self::FIELDS.iter().filter(|f| f.is_record_field())
    }
}
