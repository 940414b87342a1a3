//! Polymorphic hyperlinked references.
//!
//! A base-type record (a work, a creator) is always stored with the tag of
//! its concrete subtype. Linking a record picks the route for that subtype
//! from a caller-supplied [`ViewNameMap`] and reverses it through a
//! [`RouteTable`] into a [`Hyperlink`]. Going the other way, a hyperlink URL
//! is parsed back into `(route, id)`; the api crate then hands that to the
//! handler registered for the route.
//!
//! Both directions fail explicitly: an unmapped subtype is
//! [`CoreError::UnsupportedType`], an unregistered route name is
//! [`CoreError::UnknownRoute`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// A record stored under a base type and tagged with its concrete subtype.
pub trait Polymorphic {
    /// Human-readable name of the base type, used in error messages.
    const BASE: &'static str;

    /// The stored concrete-subtype tag, e.g. `"film"`.
    fn type_tag(&self) -> &str;

    fn pk(&self) -> DbId;
}

/// External identifier of a record: the route it is served from, its
/// primary key, and the absolute URL built from the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    pub route: String,
    pub id: DbId,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Concrete type -> route name
// ---------------------------------------------------------------------------

/// Mapping from the concrete subtype `K` of a base type to route name.
///
/// The mapping is deliberately partial: a subtype that is missing here is
/// reported as unsupported when a record of that subtype is linked.
#[derive(Debug, Clone)]
pub struct ViewNameMap<K> {
    base: &'static str,
    entries: HashMap<K, &'static str>,
}

impl<K> ViewNameMap<K>
where
    K: Copy + Eq + Hash + FromStr + fmt::Display,
{
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            entries: HashMap::new(),
        }
    }

    /// Register `route` for records of subtype `kind`.
    pub fn with(mut self, kind: K, route: &'static str) -> Self {
        self.entries.insert(kind, route);
        self
    }

    pub fn route_for(&self, kind: K) -> Option<&'static str> {
        self.entries.get(&kind).copied()
    }

    /// Route name for a stored type tag.
    ///
    /// Tags that do not parse as `K` and tags whose subtype has no entry
    /// both fail with [`CoreError::UnsupportedType`].
    pub fn route_for_tag(&self, type_tag: &str) -> Result<&'static str, CoreError> {
        type_tag
            .parse::<K>()
            .ok()
            .and_then(|kind| self.route_for(kind))
            .ok_or_else(|| CoreError::UnsupportedType {
                base: self.base,
                type_tag: type_tag.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Route name <-> URL
// ---------------------------------------------------------------------------

/// Route names and the URL path prefix each one's detail view lives under.
///
/// `reverse("film-api", 7)` with prefix `/api/v1/films` and base URL
/// `https://example.org` yields `https://example.org/api/v1/films/7`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_url: String,
    prefixes: BTreeMap<&'static str, String>,
}

impl RouteTable {
    /// Trailing slashes on `base_url` are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            prefixes: BTreeMap::new(),
        }
    }

    /// Register a detail route. `prefix` is the path before `/{id}`.
    pub fn route(mut self, name: &'static str, prefix: &str) -> Self {
        let prefix = format!("/{}", prefix.trim_matches('/'));
        self.prefixes.insert(name, prefix);
        self
    }

    pub fn contains(&self, route: &str) -> bool {
        self.prefixes.contains_key(route)
    }

    /// Build the absolute URL of record `id` under `route`.
    pub fn reverse(&self, route: &str, id: DbId) -> Result<String, CoreError> {
        let prefix = self
            .prefixes
            .get(route)
            .ok_or_else(|| CoreError::UnknownRoute(route.to_string()))?;
        Ok(format!("{}{prefix}/{id}", self.base_url))
    }

    /// Non-polymorphic link: the route is fixed by the caller.
    pub fn link(&self, route: &str, id: DbId) -> Result<Hyperlink, CoreError> {
        Ok(Hyperlink {
            route: route.to_string(),
            id,
            url: self.reverse(route, id)?,
        })
    }

    /// Recover `(route, id)` from a URL produced by [`RouteTable::reverse`].
    ///
    /// Absolute URLs must start with this table's base URL; a bare path
    /// starting with `/` is also accepted. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn parse(&self, url: &str) -> Result<(&'static str, DbId), CoreError> {
        let invalid = || CoreError::Validation(format!("Invalid hyperlink '{url}'"));

        let path = match url.strip_prefix(self.base_url.as_str()) {
            Some(rest) if rest.starts_with('/') => rest,
            _ if url.starts_with('/') => url,
            _ => return Err(invalid()),
        };
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let (prefix, id) = path.rsplit_once('/').ok_or_else(invalid)?;
        let id: DbId = id.parse().map_err(|_| invalid())?;

        self.prefixes
            .iter()
            .find(|(_, p)| p.as_str() == prefix)
            .map(|(name, _)| (*name, id))
            .ok_or_else(|| {
                CoreError::Validation(format!("Hyperlink '{url}' does not match any route"))
            })
    }

    /// Parse `url` and require that it points at `route`.
    pub fn parse_for(&self, route: &str, url: &str) -> Result<DbId, CoreError> {
        if !self.contains(route) {
            return Err(CoreError::UnknownRoute(route.to_string()));
        }
        let (found, id) = self.parse(url)?;
        if found != route {
            return Err(CoreError::Validation(format!(
                "Hyperlink '{url}' points at '{found}', expected '{route}'"
            )));
        }
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// Linker
// ---------------------------------------------------------------------------

/// Links polymorphic records through a [`ViewNameMap`] and a [`RouteTable`].
#[derive(Debug, Clone, Copy)]
pub struct PolymorphicLinker<'a, K> {
    views: &'a ViewNameMap<K>,
    routes: &'a RouteTable,
}

impl<'a, K> PolymorphicLinker<'a, K>
where
    K: Copy + Eq + Hash + FromStr + fmt::Display,
{
    pub fn new(views: &'a ViewNameMap<K>, routes: &'a RouteTable) -> Self {
        Self { views, routes }
    }

    /// Hyperlink for `record`, routed by its concrete subtype.
    pub fn link<T: Polymorphic>(&self, record: &T) -> Result<Hyperlink, CoreError> {
        let route = self
            .views
            .route_for_tag(record.type_tag())
            .map_err(|err| match err {
                CoreError::UnsupportedType { type_tag, .. } => CoreError::UnsupportedType {
                    base: T::BASE,
                    type_tag,
                },
                other => other,
            })?;
        self.routes.link(route, record.pk())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum PartyKind {
        Person,
        Org,
        Third,
    }

    impl fmt::Display for PartyKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let s = match self {
                PartyKind::Person => "person",
                PartyKind::Org => "org",
                PartyKind::Third => "third",
            };
            f.write_str(s)
        }
    }

    impl FromStr for PartyKind {
        type Err = ();

        fn from_str(s: &str) -> Result<Self, ()> {
            match s {
                "person" => Ok(PartyKind::Person),
                "org" => Ok(PartyKind::Org),
                "third" => Ok(PartyKind::Third),
                _ => Err(()),
            }
        }
    }

    struct Party {
        id: DbId,
        kind: &'static str,
    }

    impl Polymorphic for Party {
        const BASE: &'static str = "Party";

        fn type_tag(&self) -> &str {
            self.kind
        }

        fn pk(&self) -> DbId {
            self.id
        }
    }

    fn views() -> ViewNameMap<PartyKind> {
        ViewNameMap::new("Party")
            .with(PartyKind::Person, "person-api")
            .with(PartyKind::Org, "org-api")
    }

    fn routes() -> RouteTable {
        RouteTable::new("https://collections.example.org/")
            .route("person-api", "/api/v1/persons")
            .route("org-api", "api/v1/organizations/")
    }

    #[test]
    fn person_links_through_person_route() {
        let (views, routes) = (views(), routes());
        let linker = PolymorphicLinker::new(&views, &routes);

        let link = linker.link(&Party { id: 12, kind: "person" }).unwrap();

        assert_eq!(link.route, "person-api");
        assert_eq!(link.id, 12);
        assert_eq!(link.url, "https://collections.example.org/api/v1/persons/12");
    }

    #[test]
    fn every_registered_kind_uses_its_mapped_route() {
        let (views, routes) = (views(), routes());
        let linker = PolymorphicLinker::new(&views, &routes);

        for (tag, expected) in [("person", "person-api"), ("org", "org-api")] {
            let link = linker.link(&Party { id: 1, kind: tag }).unwrap();
            assert_eq!(link.route, expected);
        }
    }

    #[test]
    fn unregistered_kind_is_unsupported() {
        let (views, routes) = (views(), routes());
        let linker = PolymorphicLinker::new(&views, &routes);

        let err = linker.link(&Party { id: 3, kind: "third" }).unwrap_err();

        assert_matches!(
            err,
            CoreError::UnsupportedType { base: "Party", ref type_tag } if type_tag == "third"
        );
    }

    #[test]
    fn unparseable_tag_is_unsupported() {
        let (views, routes) = (views(), routes());
        let linker = PolymorphicLinker::new(&views, &routes);

        let err = linker.link(&Party { id: 3, kind: "robot" }).unwrap_err();

        assert_matches!(err, CoreError::UnsupportedType { .. });
    }

    #[test]
    fn mapped_route_missing_from_table_is_unknown() {
        let views = views().with(PartyKind::Third, "third-api");
        let routes = routes();
        let linker = PolymorphicLinker::new(&views, &routes);

        let err = linker.link(&Party { id: 3, kind: "third" }).unwrap_err();

        assert_matches!(err, CoreError::UnknownRoute(ref r) if r == "third-api");
    }

    #[test]
    fn parse_round_trips_reverse() {
        let routes = routes();
        let url = routes.reverse("org-api", 44).unwrap();

        assert_eq!(routes.parse(&url).unwrap(), ("org-api", 44));
    }

    #[test]
    fn parse_accepts_bare_path_and_ignores_query_and_trailing_slash() {
        let routes = routes();

        assert_eq!(
            routes.parse("/api/v1/persons/9/?fields=id").unwrap(),
            ("person-api", 9)
        );
    }

    #[test]
    fn parse_rejects_foreign_host() {
        let routes = routes();

        let err = routes
            .parse("https://elsewhere.example.com/api/v1/persons/9")
            .unwrap_err();

        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn parse_rejects_non_numeric_id_and_unknown_prefix() {
        let routes = routes();

        assert_matches!(
            routes.parse("/api/v1/persons/abc"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            routes.parse("/api/v1/robots/1"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn parse_for_requires_matching_route() {
        let routes = routes();

        assert_eq!(routes.parse_for("person-api", "/api/v1/persons/5").unwrap(), 5);
        assert_matches!(
            routes.parse_for("org-api", "/api/v1/persons/5"),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            routes.parse_for("robot-api", "/api/v1/persons/5"),
            Err(CoreError::UnknownRoute(_))
        );
    }
}
