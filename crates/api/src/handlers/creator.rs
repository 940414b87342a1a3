//! Handlers for creators of every kind.
//!
//! Mounted once per [`CreatorFamily`]: `/creators`, `/persons`,
//! `/organizations`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::creator::{CreateCreator, Creator, DerivedNames, UpdateCreator};
use collections_db::models::image::ImageInput;
use collections_db::repositories::CreatorRepo;
use serde_json::Value;
use sqlx::PgConnection;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::links::CreatorFamily;
use crate::nested::{write_image, PORTRAIT_FIELD};
use crate::query::{FieldsParams, ListParams};
use crate::response::DataResponse;
use crate::serializers::creator::represent_creator;
use crate::state::AppState;

async fn find_in_family(
    state: &AppState,
    family: &CreatorFamily,
    id: DbId,
) -> AppResult<Creator> {
    CreatorRepo::find_by_id_of_kinds(&state.pool, id, family.kinds)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))
}

async fn resolve_portrait(
    conn: &mut PgConnection,
    portrait: Option<&ImageInput>,
) -> AppResult<Option<DbId>> {
    match portrait {
        Some(input) => Ok(Some(
            write_image(conn, "portrait", &PORTRAIT_FIELD, input).await?.id,
        )),
        None => Ok(None),
    }
}

/// GET /api/v1/{family}
pub async fn list(
    State(state): State<AppState>,
    Extension(family): Extension<CreatorFamily>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Value>>>> {
    let selection = params.selection();
    let creators = CreatorRepo::list(&state.pool, family.kinds, params.page()).await?;

    let mut data = Vec::with_capacity(creators.len());
    for creator in creators {
        data.push(represent_creator(&state, &family, creator, &selection).await?);
    }
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/{family}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(family): Extension<CreatorFamily>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let creator = find_in_family(&state, &family, id).await?;
    let data = represent_creator(&state, &family, creator, &params.selection()).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/{persons|organizations}
///
/// `slug`, `name_display` and `name_sort` default from `name_full`. A
/// nested `portrait` without an `id` creates a new image.
pub async fn create(
    State(state): State<AppState>,
    Extension(family): Extension<CreatorFamily>,
    Json(input): Json<CreateCreator>,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    input.validate()?;
    let kind = family.create_kind.ok_or_else(|| {
        AppError::BadRequest(format!("Creators cannot be created under {}", family.path))
    })?;

    let names = DerivedNames::for_create(&input)?;

    let mut tx = state.pool.begin().await?;
    let portrait_id = resolve_portrait(&mut *tx, input.portrait.as_ref()).await?;
    let creator = CreatorRepo::create(&mut *tx, kind, &names, portrait_id, &input).await?;
    tx.commit().await?;
    tracing::info!(creator_id = creator.id, kind = %kind, "Creator created");

    let data = represent_creator(&state, &family, creator, &Default::default()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PATCH /api/v1/{family}/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(family): Extension<CreatorFamily>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCreator>,
) -> AppResult<Json<DataResponse<Value>>> {
    input.validate()?;
    find_in_family(&state, &family, id).await?;

    let mut tx = state.pool.begin().await?;
    let portrait_id = resolve_portrait(&mut *tx, input.portrait.as_ref()).await?;
    let creator = CreatorRepo::update(&mut *tx, id, portrait_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))?;
    tx.commit().await?;
    tracing::info!(creator_id = id, "Creator updated");

    let data = represent_creator(&state, &family, creator, &Default::default()).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/{family}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(family): Extension<CreatorFamily>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_in_family(&state, &family, id).await?;
    if CreatorRepo::delete(&state.pool, id).await? {
        tracing::info!(creator_id = id, "Creator deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: family.entity,
            id,
        }))
    }
}
