//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any [`sqlx::PgExecutor`], so the same call works against
//! the pool or inside a transaction (`&mut *tx`).

pub mod creator_repo;
pub mod image_repo;
pub mod moving_image_repo;
pub mod role_repo;
pub mod term_repo;
pub mod work_creator_repo;
pub mod work_image_repo;
pub mod work_origin_repo;
pub mod work_repo;

pub use creator_repo::CreatorRepo;
pub use image_repo::ImageRepo;
pub use moving_image_repo::MovingImageRepo;
pub use role_repo::RoleRepo;
pub use term_repo::{RatingRepo, TermRepo, TermTable};
pub use work_creator_repo::WorkCreatorRepo;
pub use work_image_repo::WorkImageRepo;
pub use work_origin_repo::WorkOriginRepo;
pub use work_repo::WorkRepo;
