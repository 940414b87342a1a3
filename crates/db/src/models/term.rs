//! Slug-keyed vocabularies: ratings, genres, media types, work image types.

use collections_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from one of the `{title, slug}` vocabulary tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Term {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}

/// A row from the `ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub image: Option<String>,
}

/// A vocabulary term embedded in another payload, matched by `slug`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TermInput {
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
}

/// A rating embedded in a moving-image payload, matched by `slug`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RatingInput {
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub image: Option<String>,
}
