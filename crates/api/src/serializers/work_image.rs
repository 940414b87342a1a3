//! Work image representations.

use std::collections::HashMap;

use collections_core::error::CoreError;
use collections_core::types::DbId;
use collections_db::models::image::Image;
use collections_db::models::work_image::WorkImage;
use collections_db::repositories::{ImageRepo, TermRepo, TermTable};
use collections_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::serializers::term::TermRepr;

#[derive(Debug, Clone, Serialize)]
pub struct WorkImageRepr {
    pub id: DbId,
    pub image: Image,
    pub show_title: bool,
    pub show_caption: bool,
    pub title_override: String,
    pub caption_override: String,
    pub order: i32,
    pub image_type: Option<TermRepr>,
}

/// Build representations for `rows`, keeping their order.
pub async fn build_work_images(pool: &DbPool, rows: &[WorkImage]) -> AppResult<Vec<WorkImageRepr>> {
    let image_ids: Vec<DbId> = rows.iter().map(|r| r.image_id).collect();
    let images: HashMap<DbId, Image> = ImageRepo::list_by_ids(pool, &image_ids)
        .await?
        .into_iter()
        .map(|i| (i.id, i))
        .collect();

    let type_ids: Vec<DbId> = rows.iter().filter_map(|r| r.type_id).collect();
    let types: HashMap<DbId, TermRepr> =
        TermRepo::list_by_ids(pool, TermTable::WorkImageTypes, &type_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, TermRepr::from(t)))
            .collect();

    rows.iter()
        .map(|row| -> AppResult<WorkImageRepr> {
            let image = images
                .get(&row.image_id)
                .cloned()
                .ok_or(CoreError::NotFound {
                    entity: "Image",
                    id: row.image_id,
                })?;
            Ok(WorkImageRepr {
                id: row.id,
                image,
                show_title: row.show_title,
                show_caption: row.show_caption,
                title_override: row.title_override.clone(),
                caption_override: row.caption_override.clone(),
                order: row.order,
                image_type: row.type_id.and_then(|id| types.get(&id)).cloned(),
            })
        })
        .collect()
}

pub async fn build_work_image(pool: &DbPool, row: &WorkImage) -> AppResult<WorkImageRepr> {
    let mut reprs = build_work_images(pool, std::slice::from_ref(row)).await?;
    reprs.pop().ok_or_else(|| {
        CoreError::NotFound {
            entity: "WorkImage",
            id: row.id,
        }
        .into()
    })
}
