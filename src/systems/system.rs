use crate::entities::{Entity, EntityStore};

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// `entities` holds the entities matching the system's [Filter](crate::systems::Filter) when its turn came up.
/// The system may read, modify, add or remove components on them through `store`;
/// membership changes show up in the lists of the systems that run after it.
/// `dt` is passed through from [Registry::tick](crate::Registry::tick) untouched.
pub trait System {
	/// Executes the system
	fn run(&mut self, store: &mut EntityStore, entities: &[Entity], dt: Option<f64>);
}

/// Any `FnMut(&mut EntityStore, &[Entity], Option<f64>)` is a [System].
impl<F: FnMut(&mut EntityStore, &[Entity], Option<f64>)> System for F {
	fn run(&mut self, store: &mut EntityStore, entities: &[Entity], dt: Option<f64>) {
		(self)(store, entities, dt)
	}
}

/// A handle to a registered [System], ordered by registration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct SystemId {
	pub(crate) index: usize,
}

impl SystemId {
	/// The system's position in the tick order.
	pub const fn index(&self) -> usize {
		self.index
	}
}
