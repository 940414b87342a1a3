//! Handlers for works of every kind, and for artworks.
//!
//! Mounted once per [`WorkFamily`]: `/works`, `/artworks`, and the
//! read/delete side of the moving-image families.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use collections_core::error::CoreError;
use collections_core::naming;
use collections_core::types::DbId;
use collections_db::models::work::{CreateWork, UpdateWork, Work};
use collections_db::models::work_image::CreateWorkImage;
use collections_db::repositories::{TermTable, WorkImageRepo, WorkRepo};
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::links::WorkFamily;
use crate::nested::{write_image, write_term, IMAGE_TYPE_FIELD, WORK_IMAGE_FIELD};
use crate::query::{FieldsParams, ListParams};
use crate::response::DataResponse;
use crate::serializers::work::represent_work;
use crate::serializers::work_image::{build_work_image, build_work_images, WorkImageRepr};
use crate::state::AppState;

/// Load work `id`, only if `family` serves its kind.
pub(crate) async fn find_in_family(
    state: &AppState,
    family: &WorkFamily,
    id: DbId,
) -> AppResult<Work> {
    WorkRepo::find_by_id_of_kinds(&state.pool, id, family.kinds)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))
}

/// GET /api/v1/{family}
pub async fn list(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Value>>>> {
    let selection = params.selection();
    let works = WorkRepo::list(&state.pool, family.kinds, params.page()).await?;

    let mut data = Vec::with_capacity(works.len());
    for work in works {
        data.push(represent_work(&state, &family, work, &selection).await?);
    }
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/{family}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let work = find_in_family(&state, &family, id).await?;
    let data = represent_work(&state, &family, work, &params.selection()).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/artworks
///
/// The kind comes from the family; the slug is derived from the title when
/// omitted.
pub async fn create(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Json(input): Json<CreateWork>,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    input.validate()?;
    let kind = family.create_kind.ok_or_else(|| {
        AppError::BadRequest(format!("Works cannot be created under {}", family.path))
    })?;

    let slug = naming::require_slug(input.slug.as_deref(), "title", &input.title)?;
    let work = WorkRepo::create(&state.pool, kind, &slug, &input).await?;
    tracing::info!(work_id = work.id, kind = %kind, "Work created");

    let data = represent_work(&state, &family, work, &Default::default()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PATCH /api/v1/{family}/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWork>,
) -> AppResult<Json<DataResponse<Value>>> {
    input.validate()?;
    find_in_family(&state, &family, id).await?;

    let work = WorkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))?;
    tracing::info!(work_id = id, "Work updated");

    let data = represent_work(&state, &family, work, &Default::default()).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/{family}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_in_family(&state, &family, id).await?;
    if WorkRepo::delete(&state.pool, id).await? {
        tracing::info!(work_id = id, "Work deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Images sub-resource
// ---------------------------------------------------------------------------

/// GET /api/v1/works/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<WorkImageRepr>>>> {
    find_in_family(&state, &family, id).await?;
    let rows = WorkImageRepo::list_by_work(&state.pool, id).await?;
    let data = build_work_images(&state.pool, &rows).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/works/{id}/images
///
/// `image` must name an existing image by `id`; `image_type`, when given,
/// an existing type by `slug`.
pub async fn create_image(
    State(state): State<AppState>,
    Extension(family): Extension<WorkFamily>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateWorkImage>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkImageRepr>>)> {
    input.validate()?;
    find_in_family(&state, &family, id).await?;

    let mut tx = state.pool.begin().await?;
    let image = write_image(&mut *tx, "image", &WORK_IMAGE_FIELD, &input.image).await?;
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
    let row = WorkImageRepo::create(&mut *tx, id, image.id, type_id, &input).await?;
    tx.commit().await?;
    tracing::info!(work_id = id, work_image_id = row.id, "Work image created");

    let data = build_work_image(&state.pool, &row).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
