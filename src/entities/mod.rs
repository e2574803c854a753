//! [Entities](Entity) represent the individual "things" in your game or application.
//!
//! An [Entity] doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! The [EntityStore] owns the components and keeps every system's list of matching entities current.

mod entity;
mod entity_mut;
mod entity_store;

pub use entity::*;
pub use entity_mut::*;
pub use entity_store::*;
