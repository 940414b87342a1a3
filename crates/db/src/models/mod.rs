//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nested payloads (`*Input`, `*Ref`) are the writable shapes of related
//! objects embedded in another resource's payload.

pub mod creator;
pub mod image;
pub mod moving_image;
pub mod role;
pub mod term;
pub mod work;
pub mod work_creator;
pub mod work_image;
pub mod work_origin;
