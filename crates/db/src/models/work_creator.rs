//! Work-creator relationship model and DTOs.

use collections_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::creator::CreatorRef;
use crate::models::role::RoleInput;
use crate::models::work::WorkRef;

/// A row from the `work_creators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkCreator {
    pub id: DbId,
    pub work_id: DbId,
    pub creator_id: DbId,
    pub role_id: Option<DbId>,
    pub is_primary: bool,
    pub order: i32,
}

/// DTO for creating a work-creator relationship.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWorkCreator {
    #[validate(nested)]
    pub work: WorkRef,
    pub creator: CreatorRef,
    #[validate(nested)]
    pub role: Option<RoleInput>,
    pub is_primary: Option<bool>,
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

/// DTO for a partial work-creator update. All fields are optional.
///
/// `role` distinguishes an omitted key (`None`, keep the current role) from
/// an explicit `null` (`Some(None)`, clear it).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkCreator {
    #[validate(nested)]
    pub work: Option<WorkRef>,
    pub creator: Option<CreatorRef>,
    #[serde(default, deserialize_with = "present")]
    pub role: Option<Option<RoleInput>>,
    pub is_primary: Option<bool>,
    #[validate(range(min = 0))]
    pub order: Option<i32>,
}

impl UpdateWorkCreator {
    /// The nested role payload, when one was sent.
    pub fn role_input(&self) -> Option<&RoleInput> {
        self.role.as_ref().and_then(Option::as_ref)
    }
}

/// Wraps a key that is present in the payload, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Resolved column values for an insert or update.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkCreatorColumns {
    pub work_id: Option<DbId>,
    pub creator_id: Option<DbId>,
    pub role_id: Option<DbId>,
    /// On update, write `role_id` even when it is `None`.
    pub set_role: bool,
    pub is_primary: Option<bool>,
    pub order: Option<i32>,
}

/// Query parameters for listing work-creators (`?work=&creator=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkCreatorFilter {
    pub work: Option<DbId>,
    pub creator: Option<DbId>,
}
