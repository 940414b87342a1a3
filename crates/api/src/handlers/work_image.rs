//! Handlers for the `/workimages` resource (a single work image).
//!
//! Listing and creating happen under `/works/{id}/images`; see
//! [`crate::handlers::work`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::work_image::UpdateWorkImage;
use collections_db::repositories::{TermTable, WorkImageRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::nested::{write_image, write_term, IMAGE_TYPE_FIELD, WORK_IMAGE_FIELD};
use crate::response::DataResponse;
use crate::serializers::work_image::{build_work_image, WorkImageRepr};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkImage",
        id,
    })
}

/// GET /api/v1/workimages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WorkImageRepr>>> {
    let row = WorkImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let data = build_work_image(&state.pool, &row).await?;
    Ok(Json(DataResponse { data }))
}

/// PATCH /api/v1/workimages/{id}
///
/// A nested `image` with an `id` switches to (and updates) that image.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkImage>,
) -> AppResult<Json<DataResponse<WorkImageRepr>>> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let image_id = match &input.image {
        Some(image) => Some(write_image(&mut *tx, "image", &WORK_IMAGE_FIELD, image).await?.id),
        None => None,
    };
    let type_id = match &input.image_type {
        Some(image_type) => Some(
            write_term(
                &mut *tx,
                TermTable::WorkImageTypes,
                "image_type",
                &IMAGE_TYPE_FIELD,
                image_type,
            )
            .await?
            .id,
        ),
        None => None,
    };
    let row = WorkImageRepo::update(&mut *tx, id, image_id, type_id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;
    tracing::info!(work_image_id = id, "Work image updated");

    let data = build_work_image(&state.pool, &row).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/workimages/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WorkImageRepo::delete(&state.pool, id).await? {
        tracing::info!(work_image_id = id, "Work image deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
