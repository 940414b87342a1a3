//! Work and moving-image work representations.

use collections_core::fields::FieldSelection;
use collections_core::types::{DbId, Timestamp};
use collections_db::models::moving_image::MovingImageDetails;
use collections_db::models::work::Work;
use collections_db::models::work_origin::WorkOrigin;
use collections_db::repositories::{
    MovingImageRepo, RatingRepo, TermRepo, TermTable, WorkCreatorRepo, WorkImageRepo,
    WorkOriginRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::links::WorkFamily;
use crate::serializers::select;
use crate::serializers::term::{RatingRepr, TermRepr};
use crate::serializers::work_creator::{build_work_creators, WorkCreatorRepr, WorkCreatorView};
use crate::serializers::work_image::{build_work_images, WorkImageRepr};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct WorkOriginRepr {
    pub geographic_location: String,
}

impl From<WorkOrigin> for WorkOriginRepr {
    fn from(origin: WorkOrigin) -> Self {
        Self {
            geographic_location: origin.geographic_location,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkRepr {
    pub creators: Vec<WorkCreatorRepr>,
    pub images: Vec<WorkImageRepr>,
    pub origin: Vec<WorkOriginRepr>,
    pub url: String,
    pub publishing_is_draft: bool,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub oneliner: String,
    pub department: String,
    pub credit_line: String,
    pub accession_number: String,
    pub creation_date_display: String,
    pub creation_date_edtf: String,
    pub id: DbId,
    pub external_ref: String,
    pub dt_created: Timestamp,
    pub dt_modified: Timestamp,
    pub admin_notes: String,
}

/// A work with its moving-image fields inlined.
#[derive(Debug, Clone, Serialize)]
pub struct MovingImageWorkRepr {
    #[serde(flatten)]
    pub work: WorkRepr,
    pub rating: Option<RatingRepr>,
    pub genres: Vec<TermRepr>,
    pub media_type: Option<TermRepr>,
    pub rating_annotation: String,
    pub duration_minutes: Option<i32>,
    pub trailer: String,
    pub imdb_link: String,
}

/// Build the representation of `work` as served by `family`; its `url`
/// uses the family's route.
pub async fn build_work(state: &AppState, family: &WorkFamily, work: Work) -> AppResult<WorkRepr> {
    let pool = &state.pool;

    let creator_rows = WorkCreatorRepo::list_by_work(pool, work.id).await?;
    let creators =
        build_work_creators(pool, &state.links, &creator_rows, WorkCreatorView::FromWork).await?;

    let image_rows = WorkImageRepo::list_by_work(pool, work.id).await?;
    let images = build_work_images(pool, &image_rows).await?;

    let origin = WorkOriginRepo::list_by_work(pool, work.id)
        .await?
        .into_iter()
        .map(WorkOriginRepr::from)
        .collect();

    Ok(WorkRepr {
        creators,
        images,
        origin,
        url: state.links.url(family.route, work.id)?,
        publishing_is_draft: work.publishing_is_draft,
        slug: work.slug,
        title: work.title,
        subtitle: work.subtitle,
        oneliner: work.oneliner,
        department: work.department,
        credit_line: work.credit_line,
        accession_number: work.accession_number,
        creation_date_display: work.creation_date_display,
        creation_date_edtf: work.creation_date_edtf,
        id: work.id,
        external_ref: work.external_ref,
        dt_created: work.dt_created,
        dt_modified: work.dt_modified,
        admin_notes: work.admin_notes,
    })
}

/// Build the moving-image representation of `work`. A missing extension
/// row is treated as empty moving-image fields.
pub async fn build_moving_image_work(
    state: &AppState,
    family: &WorkFamily,
    work: Work,
) -> AppResult<MovingImageWorkRepr> {
    let pool = &state.pool;
    let work_id = work.id;
    let details = MovingImageRepo::find(pool, work_id).await?;
    let genres = MovingImageRepo::list_genres(pool, work_id)
        .await?
        .into_iter()
        .map(TermRepr::from)
        .collect();

    let (rating, media_type) = match &details {
        Some(details) => related_terms(state, details).await?,
        None => (None, None),
    };

    let work = build_work(state, family, work).await?;
    let details = details.unwrap_or(MovingImageDetails {
        work_id,
        rating_id: None,
        rating_annotation: String::new(),
        duration_minutes: None,
        trailer: String::new(),
        imdb_link: String::new(),
        media_type_id: None,
    });

    Ok(MovingImageWorkRepr {
        work,
        rating,
        genres,
        media_type,
        rating_annotation: details.rating_annotation,
        duration_minutes: details.duration_minutes,
        trailer: details.trailer,
        imdb_link: details.imdb_link,
    })
}

async fn related_terms(
    state: &AppState,
    details: &MovingImageDetails,
) -> AppResult<(Option<RatingRepr>, Option<TermRepr>)> {
    let rating = match details.rating_id {
        Some(id) => RatingRepo::find_by_id(&state.pool, id)
            .await?
            .map(RatingRepr::from),
        None => None,
    };
    let media_type = match details.media_type_id {
        Some(id) => TermRepo::find_by_id(&state.pool, TermTable::MediaTypes, id)
            .await?
            .map(TermRepr::from),
        None => None,
    };
    Ok((rating, media_type))
}

/// Serialize `work` the way `family` serves it, with field selection
/// applied. Moving-image families get the moving-image representation,
/// the rest the base one.
pub async fn represent_work(
    state: &AppState,
    family: &WorkFamily,
    work: Work,
    selection: &FieldSelection,
) -> AppResult<serde_json::Value> {
    if family.is_moving_image() {
        let repr = build_moving_image_work(state, family, work).await?;
        select(&repr, selection)
    } else {
        let repr = build_work(state, family, work).await?;
        select(&repr, selection)
    }
}
