//! Compact, polymorphically-linked summaries of works and creators.
//!
//! A summary's `url` points at the route for the record's concrete kind
//! (a film links to `film-api`), chosen through the summary view maps in
//! [`crate::links`].

use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::creator::Creator;
use collections_db::models::work::Work;
use serde::Serialize;

use crate::links::Links;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkSummary {
    pub url: String,
    pub id: DbId,
    pub title: String,
    pub creation_date_display: String,
    pub creation_date_edtf: String,
}

impl WorkSummary {
    /// Fails with [`CoreError::UnsupportedType`] for kinds that have no
    /// summary route.
    pub fn build(links: &Links, work: &Work) -> Result<Self, CoreError> {
        let link = links.work_linker().link(work)?;
        Ok(Self {
            url: link.url,
            id: work.id,
            title: work.title.clone(),
            creation_date_display: work.creation_date_display.clone(),
            creation_date_edtf: work.creation_date_edtf.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorSummary {
    pub url: String,
    pub id: DbId,
    pub name_display: String,
}

impl CreatorSummary {
    pub fn build(links: &Links, creator: &Creator) -> Result<Self, CoreError> {
        let link = links.creator_linker().link(creator)?;
        Ok(Self {
            url: link.url,
            id: creator.id,
            name_display: creator.name_display.clone(),
        })
    }
}
