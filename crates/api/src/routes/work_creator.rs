//! Route definitions for `/workcreators`.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_creator;
use crate::state::AppState;

/// Routes mounted at `/workcreators`.
///
/// ```text
/// GET    /                  -> list (?work=&creator=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work_creator::list).post(work_creator::create))
        .route(
            "/{id}",
            get(work_creator::get_by_id)
                .patch(work_creator::update)
                .delete(work_creator::delete),
        )
}
