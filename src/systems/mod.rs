//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] is registered on a [Registry](crate::Registry) together with a [Filter].
//! From then on the registry keeps the list of entities matching that filter up to date,
//! and hands it to the system on every tick.

mod filter;
mod input;
mod system;
mod system_binding;
mod system_store;

pub use input::*;
pub use filter::*;
pub use system::*;

pub(crate) use system_store::*;
pub(crate) use system_binding::*;
