//! Creator representation.

use collections_core::fields::FieldSelection;
use collections_core::types::{DbId, Timestamp};
use collections_db::models::creator::Creator;
use collections_db::models::image::Image;
use collections_db::repositories::{ImageRepo, WorkCreatorRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::links::CreatorFamily;
use crate::serializers::select;
use crate::serializers::work_creator::{build_work_creators, WorkCreatorRepr, WorkCreatorView};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct CreatorRepr {
    pub works: Vec<WorkCreatorRepr>,
    pub portrait: Option<Image>,
    pub url: String,
    pub publishing_is_draft: bool,
    pub slug: String,
    pub alt_slug: String,
    pub name_full: String,
    pub name_display: String,
    pub name_sort: String,
    pub website: String,
    pub wikipedia_link: String,
    pub start_date_display: String,
    pub start_date_edtf: String,
    pub end_date_display: String,
    pub end_date_edtf: String,
    pub id: DbId,
    pub external_ref: String,
    pub dt_created: Timestamp,
    pub dt_modified: Timestamp,
    pub admin_notes: String,
}

pub async fn build_creator(
    state: &AppState,
    family: &CreatorFamily,
    creator: Creator,
) -> AppResult<CreatorRepr> {
    let pool = &state.pool;

    let rows = WorkCreatorRepo::list_by_creator(pool, creator.id).await?;
    let works = build_work_creators(pool, &state.links, &rows, WorkCreatorView::FromCreator).await?;

    let portrait = match creator.portrait_id {
        Some(id) => ImageRepo::find_by_id(pool, id).await?,
        None => None,
    };

    Ok(CreatorRepr {
        works,
        portrait,
        url: state.links.url(family.route, creator.id)?,
        publishing_is_draft: creator.publishing_is_draft,
        slug: creator.slug,
        alt_slug: creator.alt_slug,
        name_full: creator.name_full,
        name_display: creator.name_display,
        name_sort: creator.name_sort,
        website: creator.website,
        wikipedia_link: creator.wikipedia_link,
        start_date_display: creator.start_date_display,
        start_date_edtf: creator.start_date_edtf,
        end_date_display: creator.end_date_display,
        end_date_edtf: creator.end_date_edtf,
        id: creator.id,
        external_ref: creator.external_ref,
        dt_created: creator.dt_created,
        dt_modified: creator.dt_modified,
        admin_notes: creator.admin_notes,
    })
}

pub async fn represent_creator(
    state: &AppState,
    family: &CreatorFamily,
    creator: Creator,
    selection: &FieldSelection,
) -> AppResult<serde_json::Value> {
    let repr = build_creator(state, family, creator).await?;
    select(&repr, selection)
}
