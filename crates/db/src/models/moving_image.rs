//! Moving-image extension of a work (films, games, other moving images).

use collections_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::term::{RatingInput, TermInput};
use crate::models::work::{CreateWork, UpdateWork};

/// A row from the `moving_image_works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovingImageDetails {
    pub work_id: DbId,
    pub rating_id: Option<DbId>,
    pub rating_annotation: String,
    pub duration_minutes: Option<i32>,
    pub trailer: String,
    pub imdb_link: String,
    pub media_type_id: Option<DbId>,
}

/// Moving-image fields accepted on create and update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MovingImageFields {
    #[validate(nested)]
    pub rating: Option<RatingInput>,
    #[validate(nested)]
    pub media_type: Option<TermInput>,
    #[validate(length(max = 255))]
    pub rating_annotation: Option<String>,
    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,
    #[validate(url, length(max = 1023))]
    pub trailer: Option<String>,
    #[validate(url, length(max = 1023))]
    pub imdb_link: Option<String>,
}

/// DTO for creating a moving-image work: the base work fields plus the
/// extension fields, in one flat payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMovingImageWork {
    #[serde(flatten)]
    #[validate(nested)]
    pub work: CreateWork,
    #[serde(flatten)]
    #[validate(nested)]
    pub moving_image: MovingImageFields,
}

/// DTO for a partial moving-image work update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovingImageWork {
    #[serde(flatten)]
    #[validate(nested)]
    pub work: UpdateWork,
    #[serde(flatten)]
    #[validate(nested)]
    pub moving_image: MovingImageFields,
}
