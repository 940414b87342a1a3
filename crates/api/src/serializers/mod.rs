//! Response representations.
//!
//! Row models from `collections_db` are never returned directly: each
//! resource has a representation that adds hyperlinks and embeds its
//! related objects. Builders load related rows in batches.

pub mod creator;
pub mod summary;
pub mod term;
pub mod work;
pub mod work_creator;
pub mod work_image;

use collections_core::fields::FieldSelection;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Serialize `repr` and apply `?fields=` / `?fields!=` to it.
pub fn select<T: Serialize>(repr: &T, selection: &FieldSelection) -> AppResult<Value> {
    let mut value =
        serde_json::to_value(repr).map_err(|e| AppError::InternalError(e.to_string()))?;
    selection.apply(&mut value);
    Ok(value)
}
