use crate::entities::{Entity, EntityStore};
use crate::components::Component;

/// A fluent handle to a single [entity](Entity).
///
/// ```ignore
/// let ship = registry
/// 	.spawn()
/// 	.with(Position { x: 10.0, y: 10.0 })
/// 	.with(Velocity { x: 1.0, y: 2.0 })
/// 	.id();
/// ```
pub struct EntityMut<'l> {
	store: &'l mut EntityStore,
	entity: Entity,
}

impl<'l> EntityMut<'l> {
	pub(crate) fn new(store: &'l mut EntityStore, entity: Entity) -> Self {
		Self { store, entity }
	}

	/// The underlying [entity](Entity) handle.
	pub fn id(&self) -> Entity {
		self.entity
	}

	/// Attach a [component](Component), replacing one of the same type.
	pub fn with<T: Component>(self, value: T) -> Self {
		self.store.add_component(self.entity, value);
		self
	}

	/// Same as [with](Self::with), for call sites that read better as a verb.
	pub fn add_component<T: Component>(self, value: T) -> Self {
		self.with(value)
	}

	/// Detach the [component](Component) of type `T`, if present.
	pub fn remove_component<T: Component>(self) -> Self {
		self.store.remove_component::<T>(self.entity);
		self
	}

	pub fn get<T: Component>(&self) -> Option<&T> {
		self.store.get_component(self.entity)
	}

	pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
		self.store.get_component_mut(self.entity)
	}
}
