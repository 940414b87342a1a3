//! Shared query parameter types for API handlers.

use collections_core::fields::FieldSelection;
use collections_core::pagination::Page;
use serde::Deserialize;

/// Response field selection (`?fields=a,b` and `?fields!=c`).
#[derive(Debug, Default, Deserialize)]
pub struct FieldsParams {
    pub fields: Option<String>,
    #[serde(rename = "fields!")]
    pub exclude_fields: Option<String>,
}

impl FieldsParams {
    pub fn selection(&self) -> FieldSelection {
        FieldSelection::new(self.fields.as_deref(), self.exclude_fields.as_deref())
    }
}

/// Query string accepted by list endpoints: pagination plus field
/// selection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub fields: Option<String>,
    #[serde(rename = "fields!")]
    pub exclude_fields: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> Page {
        Page::clamped(self.limit, self.offset)
    }

    pub fn selection(&self) -> FieldSelection {
        FieldSelection::new(self.fields.as_deref(), self.exclude_fields.as_deref())
    }
}
