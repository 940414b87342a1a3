//! Images attached to a work.

use collections_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::image::ImageInput;
use crate::models::term::TermInput;

/// A row from the `work_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkImage {
    pub id: DbId,
    pub work_id: DbId,
    pub image_id: DbId,
    pub type_id: Option<DbId>,
    pub show_title: bool,
    pub show_caption: bool,
    pub title_override: String,
    pub caption_override: String,
    pub order: i32,
}

/// DTO for attaching an image to a work.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWorkImage {
    #[validate(nested)]
    pub image: ImageInput,
    #[validate(nested)]
    pub image_type: Option<TermInput>,
    pub show_title: Option<bool>,
    pub show_caption: Option<bool>,
    #[validate(length(max = 512))]
    pub title_override: Option<String>,
    pub caption_override: Option<String>,
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

/// DTO for a partial work-image update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkImage {
    #[validate(nested)]
    pub image: Option<ImageInput>,
    #[validate(nested)]
    pub image_type: Option<TermInput>,
    pub show_title: Option<bool>,
    pub show_caption: Option<bool>,
    #[validate(length(max = 512))]
    pub title_override: Option<String>,
    pub caption_override: Option<String>,
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}
