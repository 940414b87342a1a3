//! Geographic origins of a work.

use collections_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `work_origins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkOrigin {
    pub id: DbId,
    pub work_id: DbId,
    pub geographic_location: String,
    pub order: i32,
}
