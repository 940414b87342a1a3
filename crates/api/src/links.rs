//! Route names, URL prefixes and the view-name maps used to build
//! hyperlinks in responses.
//!
//! Every detail route the API serves has a stable name (`film-api`,
//! `workcreator-api`, ...). [`Links`] registers all of them in one
//! [`RouteTable`] at startup.

use collections_core::error::CoreError;
use collections_core::kinds::{CreatorKind, WorkKind};
use collections_core::polymorphic::{PolymorphicLinker, RouteTable, ViewNameMap};
use collections_core::types::DbId;

/// Path every resource router is nested under.
pub const API_PREFIX: &str = "/api/v1";

pub const WORK_ROUTE: &str = "work-api";
pub const FILM_ROUTE: &str = "film-api";
pub const GAME_ROUTE: &str = "game-api";
pub const ARTWORK_ROUTE: &str = "artwork-api";
pub const MOVING_IMAGE_WORK_ROUTE: &str = "movingimagework-api";
pub const CREATOR_ROUTE: &str = "creator-api";
pub const PERSON_ROUTE: &str = "person-api";
pub const ORGANIZATION_ROUTE: &str = "organization-api";
pub const WORK_CREATOR_ROUTE: &str = "workcreator-api";
pub const WORK_IMAGE_ROUTE: &str = "workimage-api";

const MOVING_IMAGE_KINDS: &[WorkKind] = &[WorkKind::Film, WorkKind::Game, WorkKind::MovingImage];

/// A work resource: one mount point serving a fixed set of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFamily {
    pub route: &'static str,
    /// Mount path under [`API_PREFIX`].
    pub path: &'static str,
    /// Entity name used in not-found errors.
    pub entity: &'static str,
    pub kinds: &'static [WorkKind],
    /// Kind of records created through this resource. `None` for the
    /// read-only base resource.
    pub create_kind: Option<WorkKind>,
}

impl WorkFamily {
    pub const WORKS: Self = Self {
        route: WORK_ROUTE,
        path: "/works",
        entity: "Work",
        kinds: &WorkKind::ALL,
        create_kind: None,
    };

    pub const FILMS: Self = Self {
        route: FILM_ROUTE,
        path: "/films",
        entity: "Film",
        kinds: &[WorkKind::Film],
        create_kind: Some(WorkKind::Film),
    };

    pub const GAMES: Self = Self {
        route: GAME_ROUTE,
        path: "/games",
        entity: "Game",
        kinds: &[WorkKind::Game],
        create_kind: Some(WorkKind::Game),
    };

    pub const MOVING_IMAGE_WORKS: Self = Self {
        route: MOVING_IMAGE_WORK_ROUTE,
        path: "/moving-image-works",
        entity: "MovingImageWork",
        kinds: MOVING_IMAGE_KINDS,
        create_kind: Some(WorkKind::MovingImage),
    };

    pub const ARTWORKS: Self = Self {
        route: ARTWORK_ROUTE,
        path: "/artworks",
        entity: "Artwork",
        kinds: &[WorkKind::Artwork],
        create_kind: Some(WorkKind::Artwork),
    };

    pub const ALL: [WorkFamily; 5] = [
        Self::WORKS,
        Self::FILMS,
        Self::GAMES,
        Self::MOVING_IMAGE_WORKS,
        Self::ARTWORKS,
    ];

    /// Whether every record served here has moving-image fields.
    pub fn is_moving_image(&self) -> bool {
        self.kinds.iter().all(|k| k.is_moving_image())
    }

    pub fn serves(&self, kind: WorkKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Full URL path prefix of the detail route, e.g. `/api/v1/films`.
    pub fn prefix(&self) -> String {
        format!("{API_PREFIX}{}", self.path)
    }
}

/// A creator resource: one mount point serving a fixed set of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorFamily {
    pub route: &'static str,
    pub path: &'static str,
    pub entity: &'static str,
    pub kinds: &'static [CreatorKind],
    pub create_kind: Option<CreatorKind>,
}

impl CreatorFamily {
    pub const CREATORS: Self = Self {
        route: CREATOR_ROUTE,
        path: "/creators",
        entity: "Creator",
        kinds: &CreatorKind::ALL,
        create_kind: None,
    };

    pub const PERSONS: Self = Self {
        route: PERSON_ROUTE,
        path: "/persons",
        entity: "Person",
        kinds: &[CreatorKind::Person],
        create_kind: Some(CreatorKind::Person),
    };

    pub const ORGANIZATIONS: Self = Self {
        route: ORGANIZATION_ROUTE,
        path: "/organizations",
        entity: "Organization",
        kinds: &[CreatorKind::Organization],
        create_kind: Some(CreatorKind::Organization),
    };

    pub const ALL: [CreatorFamily; 3] = [Self::CREATORS, Self::PERSONS, Self::ORGANIZATIONS];

    pub fn prefix(&self) -> String {
        format!("{API_PREFIX}{}", self.path)
    }
}

/// Concrete work kind -> route used by work summaries.
///
/// `moving_image` has no entry, so summarising such a work fails with
/// [`CoreError::UnsupportedType`].
pub fn work_summary_views() -> ViewNameMap<WorkKind> {
    ViewNameMap::new("Work")
        .with(WorkKind::Film, FILM_ROUTE)
        .with(WorkKind::Game, GAME_ROUTE)
        .with(WorkKind::Artwork, ARTWORK_ROUTE)
}

/// Concrete creator kind -> route used by creator summaries.
pub fn creator_summary_views() -> ViewNameMap<CreatorKind> {
    ViewNameMap::new("Creator")
        .with(CreatorKind::Person, PERSON_ROUTE)
        .with(CreatorKind::Organization, ORGANIZATION_ROUTE)
}

/// All detail routes plus the summary view maps, built once at startup.
#[derive(Debug, Clone)]
pub struct Links {
    routes: RouteTable,
    work_views: ViewNameMap<WorkKind>,
    creator_views: ViewNameMap<CreatorKind>,
}

impl Links {
    pub fn new(public_base_url: &str) -> Self {
        let mut routes = RouteTable::new(public_base_url);
        for family in WorkFamily::ALL {
            routes = routes.route(family.route, &family.prefix());
        }
        for family in CreatorFamily::ALL {
            routes = routes.route(family.route, &family.prefix());
        }
        let routes = routes
            .route(WORK_CREATOR_ROUTE, &format!("{API_PREFIX}/workcreators"))
            .route(WORK_IMAGE_ROUTE, &format!("{API_PREFIX}/workimages"));

        Self {
            routes,
            work_views: work_summary_views(),
            creator_views: creator_summary_views(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn work_linker(&self) -> PolymorphicLinker<'_, WorkKind> {
        PolymorphicLinker::new(&self.work_views, &self.routes)
    }

    pub fn creator_linker(&self) -> PolymorphicLinker<'_, CreatorKind> {
        PolymorphicLinker::new(&self.creator_views, &self.routes)
    }

    /// Absolute URL of record `id` under a fixed `route`.
    pub fn url(&self, route: &str, id: DbId) -> Result<String, CoreError> {
        self.routes.reverse(route, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_route_is_registered() {
        let links = Links::new("http://localhost:3000");
        for family in WorkFamily::ALL {
            assert!(links.routes().contains(family.route), "{}", family.route);
        }
        for family in CreatorFamily::ALL {
            assert!(links.routes().contains(family.route), "{}", family.route);
        }
        assert!(links.routes().contains(WORK_CREATOR_ROUTE));
        assert!(links.routes().contains(WORK_IMAGE_ROUTE));
    }

    #[test]
    fn detail_urls_use_the_family_prefix() {
        let links = Links::new("https://collections.example.org/");
        assert_eq!(
            links.url(MOVING_IMAGE_WORK_ROUTE, 3).unwrap(),
            "https://collections.example.org/api/v1/moving-image-works/3"
        );
        assert_eq!(
            links.url(WORK_CREATOR_ROUTE, 8).unwrap(),
            "https://collections.example.org/api/v1/workcreators/8"
        );
    }

    #[test]
    fn only_artworks_are_not_moving_image_families() {
        assert!(WorkFamily::FILMS.is_moving_image());
        assert!(WorkFamily::GAMES.is_moving_image());
        assert!(WorkFamily::MOVING_IMAGE_WORKS.is_moving_image());
        assert!(!WorkFamily::ARTWORKS.is_moving_image());
        assert!(!WorkFamily::WORKS.is_moving_image());
    }

    #[test]
    fn summary_views_leave_moving_image_unmapped() {
        let views = work_summary_views();
        assert_eq!(views.route_for(WorkKind::Film), Some(FILM_ROUTE));
        assert_eq!(views.route_for(WorkKind::MovingImage), None);
    }
}
