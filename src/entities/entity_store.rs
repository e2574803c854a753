use crate::data_structures::{AnyColumn, BitField, ComponentColumn};
use crate::components::{Component, ComponentId};
use crate::systems::{Filter, SystemBinding};
use std::sync::atomic::{AtomicU32, Ordering};
use crate::entities::{Entity, EntityMut};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use crate::config::RegistryConfig;
use std::collections::HashMap;
use crate::error::EcsError;
use log::{debug, trace};

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// A container for [entities](Entity) and their associated [components](Component).
///
/// The store is the only place where components are attached or detached,
/// so it also maintains each system's list of matching entities:
/// attaching a component can only add an entity to a list, detaching one can only remove it.
pub struct EntityStore {
	id: u32,
	signatures: Vec<BitField>,
	columns: HashMap<ComponentId, Box<dyn AnyColumn>, Hasher>,
	pub(crate) bindings: Vec<SystemBinding>,
	entity_capacity: usize,
}

impl EntityStore {
	pub(crate) fn new(config: &RegistryConfig) -> Self {
		Self {
			id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
			signatures: Vec::with_capacity(config.entity_capacity),
			columns: HashMap::default(),
			bindings: Vec::with_capacity(config.system_capacity),
			entity_capacity: config.entity_capacity,
		}
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	/// Systems whose filter is empty pick it up immediately.
	pub(crate) fn create_entity(&mut self) -> Entity {
		let entity = Entity {
			id: self.signatures.len() as u32 + 1,
			registry_id: self.id,
		};

		let signature = BitField::new();
		for (index, binding) in self.bindings.iter_mut().enumerate() {
			if binding.filter().matches(&signature) {
				binding.insert(entity);
				trace!("{} joined system {}", entity, index);
			}
		}

		self.signatures.push(signature);
		debug!("Created {}", entity);
		entity
	}

	/// Registers a new binding, seeding its matched list with a single scan over the existing entities.
	/// Returns the binding's index, which is also its position in the tick order.
	pub(crate) fn create_binding(&mut self, filter: Filter) -> usize {
		let mut binding = SystemBinding::new(filter, self.entity_capacity);
		for entity in self.entities() {
			if binding.filter().matches(&self.signatures[entity.index()]) {
				binding.insert(entity);
			}
		}

		let index = self.bindings.len();
		debug!(
			"Registered system {} with filter {:?} matching {} entities",
			index,
			binding.filter(),
			binding.matched().len()
		);

		self.bindings.push(binding);
		index
	}

	/// Returns a fluent handle for attaching and detaching components on `entity`.
	pub fn entity_mut(&mut self, entity: Entity) -> EntityMut<'_> {
		self.index_of(entity);
		EntityMut::new(self, entity)
	}

	/// Add a [component](Component) to the specified [entity](Entity),
	/// replacing any [component](Component) of the same type already present.
	///
	/// The function panics if the [entity](Entity) belongs to another registry.
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> Entity {
		let index = self.index_of(entity);
		self.insert_component(entity, index, value);
		entity
	}

	/// Fallible version of [add_component](Self::add_component).
	pub fn try_add_component<T: Component>(&mut self, entity: Entity, value: T) -> Result<Entity, EcsError> {
		let index = self.validate(entity)?;
		self.insert_component(entity, index, value);
		Ok(entity)
	}

	/// Remove a [component](Component) from the specified [entity](Entity), returning it.
	/// Removing a kind the entity doesn't hold does nothing and returns *None*.
	///
	/// The function panics if the [entity](Entity) belongs to another registry.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
		let index = self.index_of(entity);
		self.take_component(entity, index)
	}

	/// Fallible version of [remove_component](Self::remove_component).
	pub fn try_remove_component<T: Component>(&mut self, entity: Entity) -> Result<Option<T>, EcsError> {
		let index = self.validate(entity)?;
		Ok(self.take_component(entity, index))
	}

	/// Remove the [component](Component) of kind `id` from the specified [entity](Entity).
	/// The function will return *false* if the [component](Component) is not present.
	pub fn remove_component_by_id(&mut self, entity: Entity, id: ComponentId) -> bool {
		let index = self.index_of(entity);
		let removed = match self.columns.get_mut(&id) {
			Some(column) => column.remove_any(index),
			None => false,
		};

		if removed {
			self.detach(entity, index, id);
		}
		removed
	}

	/// Gets a reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
		let index = self.index_of(entity);
		self.column::<T>()?.get(index)
	}

	/// Gets a mutable reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
		let index = self.index_of(entity);
		self.column_mut::<T>()?.get_mut(index)
	}

	/// Fallible version of [get_component](Self::get_component).
	pub fn try_get_component<T: Component>(&self, entity: Entity) -> Result<Option<&T>, EcsError> {
		let index = self.validate(entity)?;
		Ok(self.column::<T>().and_then(|c| c.get(index)))
	}

	/// Check whether the [entity](Entity) currently holds a [component](Component) of type `T`.
	pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
		self.signature(entity).get(T::component_id().value())
	}

	/// The set of [component ids](ComponentId) the [entity](Entity) currently holds.
	pub fn signature(&self, entity: Entity) -> &BitField {
		&self.signatures[self.index_of(entity)]
	}

	/// The number of [entities](Entity) created so far.
	pub fn entity_count(&self) -> usize {
		self.signatures.len()
	}

	/// Iterate over all [entities](Entity) in creation order.
	pub fn entities(&self) -> impl Iterator<Item = Entity> {
		let registry_id = self.id;
		(1..=self.signatures.len() as u32).map(move |id| Entity { id, registry_id })
	}

	/// Scan every [entity](Entity) and yield the ones matching `filter`, in creation order.
	///
	/// Unlike a system's matched list this walks the whole store, so it is meant for
	/// one-off lookups and for checking the incremental lists against the ground truth.
	pub fn query<'l>(&'l self, filter: &'l Filter) -> impl Iterator<Item = Entity> + 'l {
		self.entities().filter(move |e| filter.matches(&self.signatures[e.index()]))
	}

	pub(crate) fn matched(&self, binding: usize) -> &[Entity] {
		self.bindings[binding].matched()
	}

	fn insert_component<T: Component>(&mut self, entity: Entity, index: usize, value: T) {
		let id = T::component_id();
		let capacity = self.entity_capacity;

		let column = self
			.columns
			.entry(id)
			.or_insert_with(|| Box::new(ComponentColumn::<T>::with_capacity(capacity)) as Box<dyn AnyColumn>)
			.as_any_mut()
			.downcast_mut::<ComponentColumn<T>>()
			.expect("component id is bound to a different type");

		if column.insert(index, value).is_some() {
			return;
		}

		trace!("{} gained {}", entity, T::component_name());
		let signature = &mut self.signatures[index];
		signature.set(id.value(), true);

		for (i, binding) in self.bindings.iter_mut().enumerate() {
			if binding.contains(entity) {
				continue;
			}
			if binding.filter().matches(signature) {
				binding.insert(entity);
				trace!("{} joined system {}", entity, i);
			}
		}
	}

	fn take_component<T: Component>(&mut self, entity: Entity, index: usize) -> Option<T> {
		let value = self.column_mut::<T>()?.remove(index)?;
		trace!("{} lost {}", entity, T::component_name());
		self.detach(entity, index, T::component_id());
		Some(value)
	}

	fn detach(&mut self, entity: Entity, index: usize, id: ComponentId) {
		let signature = &mut self.signatures[index];
		signature.set(id.value(), false);

		for (i, binding) in self.bindings.iter_mut().enumerate() {
			if !binding.contains(entity) {
				continue;
			}
			if !binding.filter().matches(signature) {
				binding.evict(entity);
				trace!("{} left system {}", entity, i);
			}
		}
	}

	fn column<T: Component>(&self) -> Option<&ComponentColumn<T>> {
		self.columns.get(&T::component_id())?.as_any().downcast_ref()
	}

	fn column_mut<T: Component>(&mut self) -> Option<&mut ComponentColumn<T>> {
		self.columns.get_mut(&T::component_id())?.as_any_mut().downcast_mut()
	}

	fn validate(&self, entity: Entity) -> Result<usize, EcsError> {
		if entity.registry_id != self.id {
			return Err(EcsError::ForeignEntity {
				entity: entity.id,
				registry: entity.registry_id,
			});
		}
		match entity.index() < self.signatures.len() {
			true => Ok(entity.index()),
			false => Err(EcsError::UnknownEntity(entity.id)),
		}
	}

	#[cfg(not(feature = "debug_only_assertions"))]
	#[inline(always)]
	fn index_of(&self, entity: Entity) -> usize {
		match self.validate(entity) {
			Ok(index) => index,
			Err(err) => panic!("{}", err),
		}
	}

	#[cfg(feature = "debug_only_assertions")]
	#[inline(always)]
	fn index_of(&self, entity: Entity) -> usize {
		debug_assert!(self.validate(entity).is_ok(), "Entity does not belong to this registry");
		entity.index()
	}
}
