//! HTTP handlers, one module per resource.
//!
//! Work and creator handlers are shared by every subtype route; the
//! [`WorkFamily`](crate::links::WorkFamily) or
//! [`CreatorFamily`](crate::links::CreatorFamily) extension installed by
//! the route module decides which kinds a request may see.

pub mod creator;
pub mod moving_image;
pub mod work;
pub mod work_creator;
pub mod work_image;
