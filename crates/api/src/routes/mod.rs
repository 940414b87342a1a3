pub mod creator;
pub mod health;
pub mod work;
pub mod work_creator;
pub mod work_image;

use axum::Router;

use crate::links::{CreatorFamily, WorkFamily};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /works                                           list
/// /works/{id}                                      get, update, delete
/// /works/{id}/images                               list, create
///
/// /films, /games, /moving-image-works              list, create
/// /films/{id}, /games/{id},
///   /moving-image-works/{id}                       get, update, delete
///
/// /artworks                                        list, create
/// /artworks/{id}                                   get, update, delete
///
/// /workimages/{id}                                 get, update, delete
///
/// /creators                                        list
/// /creators/{id}                                   get, update, delete
/// /persons, /organizations                         list, create
/// /persons/{id}, /organizations/{id}               get, update, delete
///
/// /workcreators                                    list (?work=&creator=), create
/// /workcreators/{id}                               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let mut router = Router::new();

    // One mount per work and creator family; each handler sees its family
    // as an `Extension`.
    for family in WorkFamily::ALL {
        router = router.nest(family.path, work::router(family));
    }
    for family in CreatorFamily::ALL {
        router = router.nest(family.path, creator::router(family));
    }

    router
        .nest("/workimages", work_image::router())
        .nest("/workcreators", work_creator::router())
}
