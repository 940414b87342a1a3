//! Work entity model and DTOs.

use collections_core::polymorphic::Polymorphic;
use collections_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    /// Concrete subtype tag; see [`collections_core::kinds::WorkKind`].
    pub kind: String,
    pub publishing_is_draft: bool,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub oneliner: String,
    pub department: String,
    pub credit_line: String,
    pub accession_number: String,
    pub creation_date_display: String,
    pub creation_date_edtf: String,
    pub external_ref: String,
    pub admin_notes: String,
    pub dt_created: Timestamp,
    pub dt_modified: Timestamp,
}

impl Polymorphic for Work {
    const BASE: &'static str = "Work";

    fn type_tag(&self) -> &str {
        &self.kind
    }

    fn pk(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a work. The kind comes from the route, not the payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWork {
    #[validate(length(min = 1, max = 511))]
    pub title: String,
    /// Derived from `title` when omitted.
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    pub publishing_is_draft: Option<bool>,
    #[validate(length(max = 511))]
    pub subtitle: Option<String>,
    #[validate(length(max = 511))]
    pub oneliner: Option<String>,
    #[validate(length(max = 255))]
    pub department: Option<String>,
    pub credit_line: Option<String>,
    #[validate(length(max = 255))]
    pub accession_number: Option<String>,
    #[validate(length(max = 255))]
    pub creation_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub creation_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub external_ref: Option<String>,
    pub admin_notes: Option<String>,
}

/// DTO for a partial work update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWork {
    #[validate(length(min = 1, max = 511))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    pub publishing_is_draft: Option<bool>,
    #[validate(length(max = 511))]
    pub subtitle: Option<String>,
    #[validate(length(max = 511))]
    pub oneliner: Option<String>,
    #[validate(length(max = 255))]
    pub department: Option<String>,
    pub credit_line: Option<String>,
    #[validate(length(max = 255))]
    pub accession_number: Option<String>,
    #[validate(length(max = 255))]
    pub creation_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub creation_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub external_ref: Option<String>,
    pub admin_notes: Option<String>,
}

/// A work referenced from inside another payload, e.g. a work-creator.
///
/// Either `id` or `url` identifies the work. `title` is read-only here and
/// ignored if sent; only the creation date fields can be written through.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkRef {
    pub id: Option<DbId>,
    pub url: Option<String>,
    #[validate(length(max = 255))]
    pub creation_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub creation_date_edtf: Option<String>,
}

impl WorkRef {
    pub fn has_writable_fields(&self) -> bool {
        self.creation_date_display.is_some() || self.creation_date_edtf.is_some()
    }
}
