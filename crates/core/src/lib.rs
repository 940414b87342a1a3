//! Pure domain logic for the collections API.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on these types.

pub mod error;
pub mod fields;
pub mod kinds;
pub mod naming;
pub mod nested;
pub mod pagination;
pub mod polymorphic;
pub mod settings;
pub mod types;
