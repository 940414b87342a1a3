//! Route definitions for the work families.

use axum::routing::get;
use axum::{Extension, Router};

use crate::handlers::{moving_image, work};
use crate::links::WorkFamily;
use crate::state::AppState;

/// Routes mounted at `family.path`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create          (families with a create kind)
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /{id}/images       -> list_images     (/works only)
/// POST   /{id}/images       -> create_image    (/works only)
/// ```
///
/// Moving-image families read and write the moving-image fields.
pub fn router(family: WorkFamily) -> Router<AppState> {
    let collection = match family.create_kind {
        None => get(work::list),
        Some(_) if family.is_moving_image() => get(work::list).post(moving_image::create),
        Some(_) => get(work::list).post(work::create),
    };

    let detail = get(work::get_by_id).delete(work::delete);
    let detail = if family.is_moving_image() {
        detail.patch(moving_image::update)
    } else {
        detail.patch(work::update)
    };

    let mut router = Router::new().route("/", collection).route("/{id}", detail);
    if family == WorkFamily::WORKS {
        router = router.route(
            "/{id}/images",
            get(work::list_images).post(work::create_image),
        );
    }
    router.layer(Extension(family))
}
