//! Creator entity model and DTOs.

use collections_core::error::CoreError;
use collections_core::naming;
use collections_core::polymorphic::Polymorphic;
use collections_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::image::ImageInput;

/// A row from the `creators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Creator {
    pub id: DbId,
    /// Concrete subtype tag; see [`collections_core::kinds::CreatorKind`].
    pub kind: String,
    pub publishing_is_draft: bool,
    pub slug: String,
    pub alt_slug: String,
    pub name_full: String,
    pub name_display: String,
    pub name_sort: String,
    pub website: String,
    pub wikipedia_link: String,
    pub start_date_display: String,
    pub start_date_edtf: String,
    pub end_date_display: String,
    pub end_date_edtf: String,
    pub portrait_id: Option<DbId>,
    pub external_ref: String,
    pub admin_notes: String,
    pub dt_created: Timestamp,
    pub dt_modified: Timestamp,
}

impl Polymorphic for Creator {
    const BASE: &'static str = "Creator";

    fn type_tag(&self) -> &str {
        &self.kind
    }

    fn pk(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a creator. The kind comes from the route.
///
/// `slug`, `name_display` and `name_sort` are derived from `name_full`
/// when omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCreator {
    #[validate(length(min = 1, max = 255))]
    pub name_full: String,
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 255))]
    pub alt_slug: Option<String>,
    #[validate(length(max = 255))]
    pub name_display: Option<String>,
    #[validate(length(max = 255))]
    pub name_sort: Option<String>,
    pub publishing_is_draft: Option<bool>,
    #[validate(url, length(max = 255))]
    pub website: Option<String>,
    #[validate(url, length(max = 255))]
    pub wikipedia_link: Option<String>,
    #[validate(length(max = 255))]
    pub start_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub start_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub end_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub end_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub external_ref: Option<String>,
    pub admin_notes: Option<String>,
    #[validate(nested)]
    pub portrait: Option<ImageInput>,
}

/// Values derived from `name_full` when the payload omits them.
#[derive(Debug, Clone)]
pub struct DerivedNames {
    pub slug: String,
    pub name_display: String,
    pub name_sort: String,
}

impl DerivedNames {
    /// Fails when no slug is given and none can be derived from `name_full`.
    pub fn for_create(input: &CreateCreator) -> Result<Self, CoreError> {
        let name_full = input.name_full.as_str();
        Ok(Self {
            slug: naming::require_slug(input.slug.as_deref(), "name_full", name_full)?,
            name_display: naming::name_or_full(input.name_display.as_deref(), name_full),
            name_sort: naming::name_or_full(input.name_sort.as_deref(), name_full),
        })
    }
}

/// DTO for a partial creator update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCreator {
    #[validate(length(min = 1, max = 255))]
    pub name_full: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 255))]
    pub alt_slug: Option<String>,
    #[validate(length(max = 255))]
    pub name_display: Option<String>,
    #[validate(length(max = 255))]
    pub name_sort: Option<String>,
    pub publishing_is_draft: Option<bool>,
    #[validate(url, length(max = 255))]
    pub website: Option<String>,
    #[validate(url, length(max = 255))]
    pub wikipedia_link: Option<String>,
    #[validate(length(max = 255))]
    pub start_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub start_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub end_date_display: Option<String>,
    #[validate(length(max = 64))]
    pub end_date_edtf: Option<String>,
    #[validate(length(max = 255))]
    pub external_ref: Option<String>,
    pub admin_notes: Option<String>,
    #[validate(nested)]
    pub portrait: Option<ImageInput>,
}

/// A creator referenced from inside another payload. `name_display` is
/// read-only and ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatorRef {
    pub id: Option<DbId>,
    pub url: Option<String>,
}
