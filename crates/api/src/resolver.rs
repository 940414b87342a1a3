//! Resolving hyperlinks back to records.
//!
//! A [`RouteRegistry`] maps each route name to the [`RouteHandler`] that
//! knows how to load records served under it. `resolve` parses the URL for
//! the requested route and delegates the lookup to that handler.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use collections_core::error::CoreError;
use collections_core::kinds::{CreatorKind, WorkKind};
use collections_core::polymorphic::RouteTable;
use collections_core::types::DbId;
use collections_db::models::creator::Creator;
use collections_db::models::work::Work;
use collections_db::repositories::{CreatorRepo, WorkRepo};
use collections_db::DbPool;

use crate::error::AppResult;
use crate::links::{CreatorFamily, WorkFamily};

/// Loads the concrete record served under one route.
#[async_trait]
pub trait RouteHandler<T: Send>: Send + Sync {
    async fn load(&self, pool: &DbPool, id: DbId) -> AppResult<Option<T>>;
}

/// Loads works, restricted to the kinds a route serves.
#[derive(Debug, Clone, Copy)]
pub struct WorkKindHandler {
    pub kinds: &'static [WorkKind],
}

#[async_trait]
impl RouteHandler<Work> for WorkKindHandler {
    async fn load(&self, pool: &DbPool, id: DbId) -> AppResult<Option<Work>> {
        Ok(WorkRepo::find_by_id_of_kinds(pool, id, self.kinds).await?)
    }
}

/// Loads creators, restricted to the kinds a route serves.
#[derive(Debug, Clone, Copy)]
pub struct CreatorKindHandler {
    pub kinds: &'static [CreatorKind],
}

#[async_trait]
impl RouteHandler<Creator> for CreatorKindHandler {
    async fn load(&self, pool: &DbPool, id: DbId) -> AppResult<Option<Creator>> {
        Ok(CreatorRepo::find_by_id_of_kinds(pool, id, self.kinds).await?)
    }
}

/// Route name -> handler, for records of base type `T`.
pub struct RouteRegistry<T: Send> {
    entity: &'static str,
    handlers: HashMap<&'static str, Arc<dyn RouteHandler<T>>>,
}

impl<T: Send + 'static> RouteRegistry<T> {
    /// `entity` names the base type in not-found errors.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            handlers: HashMap::new(),
        }
    }

    pub fn register(mut self, route: &'static str, handler: impl RouteHandler<T> + 'static) -> Self {
        self.handlers.insert(route, Arc::new(handler));
        self
    }

    pub fn handles(&self, route: &str) -> bool {
        self.handlers.contains_key(route)
    }

    /// Look up the record `url` identifies under `route`.
    ///
    /// Fails with [`CoreError::UnknownRoute`] if no handler is registered
    /// for `route`, and with a validation error if `url` does not point at
    /// `route`.
    pub async fn find(
        &self,
        pool: &DbPool,
        routes: &RouteTable,
        url: &str,
        route: &str,
    ) -> AppResult<Option<T>> {
        let handler = self
            .handlers
            .get(route)
            .ok_or_else(|| CoreError::UnknownRoute(route.to_string()))?;
        let id = routes.parse_for(route, url)?;
        handler.load(pool, id).await
    }

    /// Like [`RouteRegistry::find`], but a missing record is
    /// [`CoreError::NotFound`].
    pub async fn resolve(
        &self,
        pool: &DbPool,
        routes: &RouteTable,
        url: &str,
        route: &str,
    ) -> AppResult<T> {
        let id = routes.parse_for(route, url)?;
        self.find(pool, routes, url, route)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: self.entity,
                    id,
                }
                .into()
            })
    }

    /// Look up a record under whichever route `url` points at.
    pub async fn find_any(
        &self,
        pool: &DbPool,
        routes: &RouteTable,
        url: &str,
    ) -> AppResult<Option<T>> {
        let (route, _) = routes.parse(url)?;
        self.find(pool, routes, url, route).await
    }
}

/// Handlers for every work route.
pub fn work_registry() -> RouteRegistry<Work> {
    WorkFamily::ALL
        .into_iter()
        .fold(RouteRegistry::new("Work"), |registry, family| {
            registry.register(family.route, WorkKindHandler { kinds: family.kinds })
        })
}

/// Handlers for every creator route.
pub fn creator_registry() -> RouteRegistry<Creator> {
    CreatorFamily::ALL
        .into_iter()
        .fold(RouteRegistry::new("Creator"), |registry, family| {
            registry.register(family.route, CreatorKindHandler { kinds: family.kinds })
        })
}
