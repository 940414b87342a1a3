//! Image model and its nested writable shape.

use collections_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    /// Storage path or URL of the image file.
    pub image: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub title: String,
    pub alt_text: String,
    pub caption: String,
    pub credit: String,
}

/// An image embedded in another payload (creator portrait, work image).
///
/// With `id`, the existing image is matched; otherwise a new one is
/// created, which requires `image`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ImageInput {
    pub id: Option<DbId>,
    #[validate(length(min = 1))]
    pub image: Option<String>,
    #[validate(range(min = 0))]
    pub width: Option<i32>,
    #[validate(range(min = 0))]
    pub height: Option<i32>,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    #[validate(length(max = 255))]
    pub credit: Option<String>,
}
