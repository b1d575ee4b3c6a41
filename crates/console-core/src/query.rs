//! Search Filter
//!
//! Builds the collection query string from the non-empty searchable fields.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::resource::{FieldKind, FormValues, Resource};

/// Everything except RFC 3986 unreserved characters gets encoded
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a single query value or path segment
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Ordered key/value filters for a collection search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pairs: Vec<(&'static str, String)>,
}

impl SearchFilter {
    /// Collect filters in field order, skipping empty values.
    /// Flags only filter when set to "true"; sort keys are passed through untouched.
    pub fn from_form<R: Resource>(form: &FormValues) -> Self {
        let mut pairs = Vec::new();
        for field in R::FIELDS.iter().filter(|f| f.searchable) {
            let raw = form.get(field.name);
            let value = match field.kind {
                FieldKind::Flag => {
                    if raw == "true" {
                        raw.to_string()
                    } else {
                        String::new()
                    }
                }
                FieldKind::Sort(_) => raw.to_string(),
                FieldKind::Text | FieldKind::Id => R::SEARCH_STYLE.normalize(raw),
            };
            if !value.is_empty() && !pairs.iter().any(|(k, _)| *k == field.name) {
                pairs.push((field.name, value));
            }
        }
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// `key=value` pairs joined by `&`, values percent-encoded
    pub fn query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
