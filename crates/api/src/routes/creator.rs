//! Route definitions for the creator families.

use axum::routing::get;
use axum::{Extension, Router};

use crate::handlers::creator;
use crate::links::CreatorFamily;
use crate::state::AppState;

/// Routes mounted at `family.path`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create          (/persons, /organizations)
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router(family: CreatorFamily) -> Router<AppState> {
    let collection = match family.create_kind {
        Some(_) => get(creator::list).post(creator::create),
        None => get(creator::list),
    };

    Router::new()
        .route("/", collection)
        .route(
            "/{id}",
            get(creator::get_by_id)
                .patch(creator::update)
                .delete(creator::delete),
        )
        .layer(Extension(family))
}
