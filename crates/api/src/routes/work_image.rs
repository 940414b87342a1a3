//! Route definitions for `/workimages`.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_image;
use crate::state::AppState;

/// Routes mounted at `/workimages`.
///
/// ```text
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(work_image::get_by_id)
            .patch(work_image::update)
            .delete(work_image::delete),
    )
}
