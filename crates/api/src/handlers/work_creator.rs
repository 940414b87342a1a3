//! Handlers for the `/workcreators` resource.
//!
//! `work` and `creator` are nested references, given by `id` or by `url`
//! (any work or creator hyperlink this API produces). `role` is matched by
//! slug and created when unknown.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::role::RoleInput;
use collections_db::models::work_creator::{
    CreateWorkCreator, UpdateWorkCreator, WorkCreator, WorkCreatorColumns, WorkCreatorFilter,
};
use collections_db::repositories::{CreatorRepo, WorkCreatorRepo, WorkRepo};
use serde_json::Value;
use sqlx::PgConnection;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::nested::{write_creator_ref, write_role, write_work_ref};
use crate::query::{FieldsParams, ListParams};
use crate::response::DataResponse;
use crate::serializers::select;
use crate::serializers::summary::{CreatorSummary, WorkSummary};
use crate::serializers::work_creator::{
    build_work_creator, build_work_creators, WorkCreatorRepr, WorkCreatorView,
};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "WorkCreator",
        id,
    })
}

async fn role_id(conn: &mut PgConnection, role: Option<&RoleInput>) -> AppResult<Option<DbId>> {
    match role {
        Some(input) => Ok(Some(write_role(conn, "role", input).await?.id)),
        None => Ok(None),
    }
}

/// Fail unless both ends of `row` can be summarised, so a relationship
/// that could never be read back is rolled back with its transaction.
async fn ensure_linkable(
    state: &AppState,
    conn: &mut PgConnection,
    row: &WorkCreator,
) -> AppResult<()> {
    let work = WorkRepo::find_by_id(&mut *conn, row.work_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Work",
            id: row.work_id,
        })?;
    WorkSummary::build(&state.links, &work)?;

    let creator = CreatorRepo::find_by_id(&mut *conn, row.creator_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Creator",
            id: row.creator_id,
        })?;
    CreatorSummary::build(&state.links, &creator)?;
    Ok(())
}

/// GET /api/v1/workcreators?work=&creator=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<WorkCreatorFilter>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let rows = WorkCreatorRepo::list(&state.pool, &filter, params.page()).await?;
    let reprs =
        build_work_creators(&state.pool, &state.links, &rows, WorkCreatorView::Full).await?;
    let data = select(&reprs, &params.selection())?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/workcreators/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FieldsParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let row = WorkCreatorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let repr = build_work_creator(&state.pool, &state.links, &row).await?;
    let data = select(&repr, &params.selection())?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/workcreators
///
/// A duplicate `(work, creator, role)` triple is rejected with 409 by the
/// unique constraint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkCreator>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkCreatorRepr>>)> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    let work = write_work_ref(&state, &mut *tx, "work", &input.work).await?;
    let creator = write_creator_ref(&state, &mut *tx, "creator", &input.creator).await?;
    let columns = WorkCreatorColumns {
        role_id: role_id(&mut *tx, input.role.as_ref()).await?,
        is_primary: input.is_primary,
        order: input.order,
        ..Default::default()
    };
    let row = WorkCreatorRepo::create(&mut *tx, work.id, creator.id, &columns).await?;
    ensure_linkable(&state, &mut *tx, &row).await?;
    tx.commit().await?;
    tracing::info!(
        work_creator_id = row.id,
        work_id = work.id,
        creator_id = creator.id,
        "Work creator created",
    );

    let data = build_work_creator(&state.pool, &state.links, &row).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PATCH /api/v1/workcreators/{id}
///
/// Omitted nested fields leave the current reference in place. `"role":
/// null` clears the role.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkCreator>,
) -> AppResult<Json<DataResponse<WorkCreatorRepr>>> {
    input.validate()?;
    if let Some(role) = input.role_input() {
        role.validate()?;
    }

    let mut tx = state.pool.begin().await?;
    let work_id = match &input.work {
        Some(work) => Some(write_work_ref(&state, &mut *tx, "work", work).await?.id),
        None => None,
    };
    let creator_id = match &input.creator {
        Some(creator) => Some(write_creator_ref(&state, &mut *tx, "creator", creator).await?.id),
        None => None,
    };
    let columns = WorkCreatorColumns {
        work_id,
        creator_id,
        role_id: role_id(&mut *tx, input.role_input()).await?,
        set_role: input.role.is_some(),
        is_primary: input.is_primary,
        order: input.order,
    };
    let row = WorkCreatorRepo::update(&mut *tx, id, &columns)
        .await?
        .ok_or_else(|| not_found(id))?;
    ensure_linkable(&state, &mut *tx, &row).await?;
    tx.commit().await?;
    tracing::info!(work_creator_id = id, "Work creator updated");

    let data = build_work_creator(&state.pool, &state.links, &row).await?;
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/workcreators/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WorkCreatorRepo::delete(&state.pool, id).await? {
        tracing::info!(work_creator_id = id, "Work creator deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
