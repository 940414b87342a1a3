//! Work-creator role vocabulary.

use collections_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_plural: String,
    pub past_tense: String,
}

/// A role embedded in a work-creator payload, matched by `slug`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RoleInput {
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub title_plural: Option<String>,
    #[validate(length(max = 255))]
    pub past_tense: Option<String>,
}
