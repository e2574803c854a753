//! A small entity component system that keeps, for every registered system,
//! an always current list of the entities matching the system's filter.
//!
//! Membership is updated the moment a component is attached or detached,
//! so a tick only touches the entities each system actually cares about.

extern crate self as sift_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
mod registry;
mod config;
mod error;

pub use lazy_static::lazy_static;
pub use registry::Registry;
pub use config::RegistryConfig;
pub use error::EcsError;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::registry::Registry;
	pub use crate::config::RegistryConfig;
	pub use crate::error::EcsError;
	pub use crate::entities::{Entity, EntityMut, EntityStore};
}

#[cfg(test)]
mod tests;
