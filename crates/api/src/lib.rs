//! Collections API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! representations, reference resolution) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod links;
pub mod nested;
pub mod query;
pub mod resolver;
pub mod response;
pub mod router;
pub mod routes;
pub mod serializers;
pub mod state;
