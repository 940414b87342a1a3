//! Work-creator representations.

use std::collections::HashMap;

use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::creator::Creator;
use collections_db::models::role::Role;
use collections_db::models::work::Work;
use collections_db::models::work_creator::WorkCreator;
use collections_db::repositories::{CreatorRepo, RoleRepo, WorkRepo};
use collections_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::links::{Links, WORK_CREATOR_ROUTE};
use crate::serializers::summary::{CreatorSummary, WorkSummary};
use crate::serializers::term::RoleRepr;

/// Which side of the relationship to leave out.
///
/// Embedded under a work, the work itself is redundant; likewise for a
/// creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkCreatorView {
    Full,
    FromWork,
    FromCreator,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkCreatorRepr {
    pub url: String,
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<WorkSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<CreatorSummary>,
    pub role: Option<RoleRepr>,
    pub is_primary: bool,
    pub order: i32,
}

/// Build representations for `rows`, loading works, creators and roles in
/// one query each.
pub async fn build_work_creators(
    pool: &DbPool,
    links: &Links,
    rows: &[WorkCreator],
    view: WorkCreatorView,
) -> AppResult<Vec<WorkCreatorRepr>> {
    let works: HashMap<DbId, Work> = if view == WorkCreatorView::FromWork {
        HashMap::new()
    } else {
        let ids: Vec<DbId> = rows.iter().map(|r| r.work_id).collect();
        WorkRepo::list_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|w| (w.id, w))
            .collect()
    };
    let creators: HashMap<DbId, Creator> = if view == WorkCreatorView::FromCreator {
        HashMap::new()
    } else {
        let ids: Vec<DbId> = rows.iter().map(|r| r.creator_id).collect();
        CreatorRepo::list_by_ids(pool, &ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect()
    };
    let role_ids: Vec<DbId> = rows.iter().filter_map(|r| r.role_id).collect();
    let roles: HashMap<DbId, Role> = RoleRepo::list_by_ids(pool, &role_ids)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    rows.iter()
        .map(|row| -> AppResult<WorkCreatorRepr> {
            let work = match view {
                WorkCreatorView::FromWork => None,
                _ => {
                    let work = works.get(&row.work_id).ok_or(CoreError::NotFound {
                        entity: "Work",
                        id: row.work_id,
                    })?;
                    Some(WorkSummary::build(links, work)?)
                }
            };
            let creator = match view {
                WorkCreatorView::FromCreator => None,
                _ => {
                    let creator = creators.get(&row.creator_id).ok_or(CoreError::NotFound {
                        entity: "Creator",
                        id: row.creator_id,
                    })?;
                    Some(CreatorSummary::build(links, creator)?)
                }
            };
            let role = row
                .role_id
                .and_then(|id| roles.get(&id))
                .cloned()
                .map(RoleRepr::from);

            Ok(WorkCreatorRepr {
                url: links.url(WORK_CREATOR_ROUTE, row.id)?,
                id: row.id,
                work,
                creator,
                role,
                is_primary: row.is_primary,
                order: row.order,
            })
        })
        .collect()
}

/// Representation of a single work-creator with both sides embedded.
pub async fn build_work_creator(
    pool: &DbPool,
    links: &Links,
    row: &WorkCreator,
) -> AppResult<WorkCreatorRepr> {
    let mut reprs =
        build_work_creators(pool, links, std::slice::from_ref(row), WorkCreatorView::Full).await?;
    reprs.pop().ok_or_else(|| {
        CoreError::NotFound {
            entity: "WorkCreator",
            id: row.id,
        }
        .into()
    })
}
