use crate::systems::{Filter, InputSender, InputState, InputSystem, System, SystemId, SystemStore};
use crate::entities::{Entity, EntityMut, EntityStore};
use crate::config::RegistryConfig;
use std::ops::{Deref, DerefMut};

/// A container for [`entities`](Entity) and systems.
///
/// Components are attached and detached through the [EntityStore] the registry derefs to.
/// Systems are registered with a [Filter] and run in registration order by [tick](Registry::tick),
/// each receiving the entities currently matching its filter.
///
/// Systems only get access to the [EntityStore], so they cannot create entities
/// or register other systems while a tick is running.
pub struct Registry {
	entity_store: EntityStore,
	system_store: SystemStore,
}

impl Registry {
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			entity_store: EntityStore::new(&config),
			system_store: SystemStore::with_capacity(config.system_capacity),
		}
	}

	/// Creates a single [`entity`](Entity) with no components attached.
	pub fn create_entity(&mut self) -> Entity {
		self.entity_store.create_entity()
	}

	/// Creates an [`entity`](Entity) and returns a handle for attaching its components.
	pub fn spawn(&mut self) -> EntityMut<'_> {
		let entity = self.entity_store.create_entity();
		self.entity_store.entity_mut(entity)
	}

	/// Add a new [system](System) to the [Registry].
	/// Its matched list starts out with every existing entity that satisfies `filter`.
	pub fn add_system<T: 'static + System>(&mut self, filter: Filter, system: T) -> SystemId {
		let index = self.entity_store.create_binding(filter);
		self.system_store.add_system(Box::new(system));
		debug_assert_eq!(index + 1, self.system_store.len());
		SystemId { index }
	}

	/// Add a [system](System) driven by input recorded between ticks.
	/// The returned [InputSender] is how the event source feeds the system's state.
	pub fn add_input_system<S, F>(&mut self, filter: Filter, behavior: F) -> (SystemId, InputSender<S>)
	where
		S: InputState,
		F: 'static + FnMut(&mut S, &mut EntityStore, &[Entity], Option<f64>),
	{
		let (system, sender) = InputSystem::new(behavior);
		(self.add_system(filter, system), sender)
	}

	/// Execute all [systems](System) once, in registration order.
	pub fn tick(&mut self, dt: Option<f64>) {
		self.system_store.run_systems(&mut self.entity_store, dt);
	}

	/// Shorthand for `tick(Some(dt))`.
	pub fn tick_with(&mut self, dt: f64) {
		self.tick(Some(dt))
	}

	/// The entities currently matching the [system](System)'s filter, in the order they started matching.
	pub fn matched(&self, system: SystemId) -> &[Entity] {
		self.entity_store.matched(system.index)
	}

	pub fn system_filter(&self, system: SystemId) -> &Filter {
		self.entity_store.bindings[system.index].filter()
	}

	/// Iterate over the registered [systems](System) in tick order.
	pub fn systems(&self) -> impl Iterator<Item = SystemId> {
		(0..self.system_store.len()).map(|index| SystemId { index })
	}

	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}

	/// The number of completed ticks.
	pub fn tick_count(&self) -> u64 {
		self.system_store.ticks()
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for Registry {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_store
	}
}

impl DerefMut for Registry {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_store
	}
}
