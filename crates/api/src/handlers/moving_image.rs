//! Create and update handlers for the moving-image families
//! (`/films`, `/games`, `/moving-image-works`).
//!
//! A moving-image work is a `works` row plus its `moving_image_works`
//! extension row; both are written in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use collections_core::error::CoreError;
use collections_core::naming;
use collections_core::types::DbId;
use collections_db::models::moving_image::{
    CreateMovingImageWork, MovingImageFields, UpdateMovingImageWork,
};
use collections_db::repositories::{MovingImageRepo, TermTable, WorkRepo};
use serde_json::Value;
use sqlx::PgConnection;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::work::find_in_family;
use crate::links::WorkFamily;
use crate::nested::{write_rating, write_term, MEDIA_TYPE_FIELD};
use crate::response::DataResponse;
use crate::serializers::work::represent_work;
use crate::state::AppState;

/// Resolve the nested `rating` and `media_type` to row IDs, creating
/// unknown slugs.
async fn related_ids(
    conn: &mut PgConnection,
    fields: &MovingImageFields,
) -> AppResult<(Option<DbId>, Option<DbId>)> {
    let rating_id = match &fields.rating {
        Some(rating) => Some(write_rating(&mut *conn, "rating", rating).await?.id),
        None => None,
    };
    let media_type_id = match &fields.media_type {
        Some(media_type) => Some(
            write_term(
                &mut *conn,
                TermTable::MediaTypes,
                "media_type",
                &MEDIA_TYPE_FIELD,
                media_type,
            )
            .await?
            .id,
        ),
        None => None,
    };
    Ok((rating_id, media_type_id))
}

/// POST /api/v1/{films|games|moving-image-works}
pub async fn create(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Json(input): Json<CreateMovingImageWork>,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    input.validate()?;
    let kind = family.create_kind.ok_or_else(|| {
        AppError::BadRequest(format!("Works cannot be created under {}", family.path))
    })?;

    let slug = naming::require_slug(input.work.slug.as_deref(), "title", &input.work.title)?;

    let mut tx = state.pool.begin().await?;
    let work = WorkRepo::create(&mut *tx, kind, &slug, &input.work).await?;
    let (rating_id, media_type_id) = related_ids(&mut *tx, &input.moving_image).await?;
    MovingImageRepo::create(
        &mut *tx,
        work.id,
        &input.moving_image,
        rating_id,
        media_type_id,
    )
    .await?;
    tx.commit().await?;
    tracing::info!(work_id = work.id, kind = %kind, "Moving-image work created");

    let data = represent_work(&state, &family, work, &Default::default()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PATCH /api/v1/{films|games|moving-image-works}/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovingImageWork>,
) -> AppResult<Json<DataResponse<Value>>> {
    input.validate()?;
    find_in_family(&state, &family, id).await?;

    let mut tx = state.pool.begin().await?;
    let work = WorkRepo::update(&mut *tx, id, &input.work)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))?;
    let (rating_id, media_type_id) = related_ids(&mut *tx, &input.moving_image).await?;
    let updated = MovingImageRepo::update(
        &mut *tx,
        id,
        &input.moving_image,
        rating_id,
        media_type_id,
    )
    .await?;
    if updated.is_none() {
        MovingImageRepo::create(&mut *tx, id, &input.moving_image, rating_id, media_type_id)
            .await?;
    }
    tx.commit().await?;
    tracing::info!(work_id = id, "Moving-image work updated");

    let data = represent_work(&state, &family, work, &Default::default()).await?;
    Ok(Json(DataResponse { data }))
}
