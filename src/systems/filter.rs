use crate::components::{Component, ComponentId, ComponentSet, ComponentType};
use crate::data_structures::BitField;
use std::fmt::{Debug, Formatter};

/// The set of [component](Component) kinds an [entity](crate::entities::Entity)
/// must hold to be picked up by a [system](crate::systems::System).
///
/// The empty filter matches every entity.
#[derive(Clone, Default)]
pub struct Filter {
	bits: BitField,
	kinds: Vec<ComponentType>,
}

impl Filter {
	/// Create an empty [Filter].
	pub fn new() -> Self {
		Self::default()
	}

	/// A [Filter] matching every entity.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Build a [Filter] from a tuple of [component](Component) types.
	/// Naming a type more than once is the same as naming it once.
	pub fn of<S: ComponentSet>() -> Self {
		let mut kinds = S::component_types();
		let mut seen = Vec::with_capacity(kinds.len());
		kinds.retain(|k| match seen.contains(k) {
			true => false,
			false => {
				seen.push(*k);
				true
			},
		});

		Self {
			bits: S::get_bitfield().as_ref().clone(),
			kinds,
		}
	}

	/// Add the [component](Component) type `T` to the [Filter]. Adding a type twice has no effect.
	pub fn with<T: Component>(mut self) -> Self {
		self.insert(ComponentType::of::<T>());
		self
	}

	/// Check whether the [Filter] requires the kind `id`.
	pub fn contains(&self, id: ComponentId) -> bool {
		self.bits.get(id.value())
	}

	/// Check whether an entity holding the kinds in `signature` satisfies the [Filter].
	#[inline(always)]
	pub fn matches(&self, signature: &BitField) -> bool {
		self.bits.is_subset_of(signature)
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	/// The required kinds, in the order they were added.
	pub fn kinds(&self) -> &[ComponentType] {
		&self.kinds
	}

	pub fn bits(&self) -> &BitField {
		&self.bits
	}

	fn insert(&mut self, kind: ComponentType) {
		if !self.bits.get(kind.id().value()) {
			self.bits.set(kind.id().value(), true);
			self.kinds.push(kind);
		}
	}
}

impl From<&[ComponentType]> for Filter {
	fn from(kinds: &[ComponentType]) -> Self {
		let mut filter = Self::new();
		for kind in kinds {
			filter.insert(*kind);
		}
		filter
	}
}

impl Eq for Filter {}

impl PartialEq<Self> for Filter {
	fn eq(&self, other: &Self) -> bool {
		self.bits == other.bits
	}
}

impl Debug for Filter {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.kinds.iter().map(|k| k.name())).finish()
	}
}
