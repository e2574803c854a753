//! [Components](Component) are the plain data records attached to [entities](crate::entities::Entity).
//!
//! Every component type carries a [ComponentId] that identifies its kind at runtime.
//! An entity holds at most one component of each kind.

mod component_id;
mod component_set;
mod component_type;

pub use component_id::*;
pub use component_set::*;
pub use component_type::*;
pub use sift_ecs_derive::Component;
