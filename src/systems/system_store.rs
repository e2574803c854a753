use crate::entities::{Entity, EntityStore};
use crate::systems::System;
use log::debug;

/// The behaviours of the registered systems, in registration order.
/// Their filters and matched lists live in the [EntityStore], under the same index.
pub(crate) struct SystemStore {
	systems: Vec<Box<dyn System>>,
	scratch: Vec<Entity>,
	ticks: u64,
}

impl SystemStore {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			systems: Vec::with_capacity(capacity),
			scratch: Vec::new(),
			ticks: 0,
		}
	}

	pub fn add_system(&mut self, system: Box<dyn System>) {
		self.systems.push(system);
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}

	pub fn ticks(&self) -> u64 {
		self.ticks
	}

	/// Run every system once, in registration order.
	///
	/// Each system iterates a copy of its matched list taken right before it runs,
	/// so removals it performs don't shift the list under it,
	/// while every later system sees the up to date membership.
	pub fn run_systems(&mut self, entities: &mut EntityStore, dt: Option<f64>) {
		self.ticks += 1;
		for (index, system) in self.systems.iter_mut().enumerate() {
			self.scratch.clear();
			self.scratch.extend_from_slice(entities.matched(index));
			system.run(entities, &self.scratch, dt);
		}
		debug!("Tick {} ran {} systems (dt: {:?})", self.ticks, self.systems.len(), dt);
	}
}
