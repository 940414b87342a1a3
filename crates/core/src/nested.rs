//! Planning writes through nested related objects.
//!
//! A payload such as `{"role": {"slug": "director", "title": "Director"}}`
//! either points at an existing related row, updates it, or creates a new
//! one, depending on the field's [`WritableRelatedField`] settings. The
//! decision is pure; the api layer carries it out inside the request's
//! transaction.

use crate::error::CoreError;
use crate::types::DbId;

/// Per-field rules for writing through a nested related object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritableRelatedField {
    /// Key in the nested payload used to find an existing row.
    pub lookup_field: &'static str,
    /// Create the related row when no existing row matches.
    pub can_create: bool,
    /// Apply the remaining nested fields to a matched row.
    pub can_update: bool,
}

impl Default for WritableRelatedField {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WritableRelatedField {
    /// Look up by `id`, never create, update a match.
    pub const DEFAULT: Self = Self {
        lookup_field: "id",
        can_create: false,
        can_update: true,
    };

    /// Look up by `slug`, create when absent, never update a match.
    pub const fn slug_vocabulary() -> Self {
        Self {
            lookup_field: "slug",
            can_create: true,
            can_update: false,
        }
    }

    pub const fn lookup(self, field: &'static str) -> Self {
        Self {
            lookup_field: field,
            ..self
        }
    }

    pub const fn creatable(self) -> Self {
        Self {
            can_create: true,
            ..self
        }
    }

    pub const fn read_only_match(self) -> Self {
        Self {
            can_update: false,
            ..self
        }
    }
}

/// What to do with one nested related object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedAction {
    /// Point at the matched row as-is.
    UseExisting(DbId),
    /// Apply the nested fields to the matched row, then point at it.
    UpdateExisting(DbId),
    /// Insert a new related row from the nested fields.
    Create,
}

/// Decide how to write nested `field`.
///
/// `lookup` is the value of `settings.lookup_field` in the payload, if
/// supplied; `existing` is the row it matched, if any.
pub fn plan_nested_write(
    field: &str,
    settings: &WritableRelatedField,
    lookup: Option<&str>,
    existing: Option<DbId>,
) -> Result<NestedAction, CoreError> {
    match (lookup, existing) {
        (Some(_), Some(id)) if settings.can_update => Ok(NestedAction::UpdateExisting(id)),
        (Some(_), Some(id)) => Ok(NestedAction::UseExisting(id)),
        (_, _) if settings.can_create => Ok(NestedAction::Create),
        (Some(value), None) => Err(CoreError::Validation(format!(
            "{field}: no match for {}={value}",
            settings.lookup_field
        ))),
        (None, _) => Err(CoreError::Validation(format!(
            "{field}: {} is required",
            settings.lookup_field
        ))),
    }
}
