//! Search Results Table

use crate::resource::Resource;

/// Header plus one plain-text row per returned record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    pub fn from_records<R: Resource>(records: &[R]) -> Self {
        Self {
            header: R::TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
            rows: records.iter().map(R::table_row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
