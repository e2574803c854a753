use crate::data_structures::BitField;
use crate::entities::Entity;
use crate::systems::Filter;

/// A registered [Filter] together with the entities currently satisfying it.
///
/// `matched` keeps creation/attach order; `members` mirrors it as a bitfield over entity indices
/// so membership checks don't walk the list.
pub(crate) struct SystemBinding {
	filter: Filter,
	members: BitField,
	matched: Vec<Entity>,
}

impl SystemBinding {
	pub fn new(filter: Filter, capacity: usize) -> Self {
		Self {
			filter,
			members: BitField::with_capacity(capacity),
			matched: Vec::new(),
		}
	}

	pub fn filter(&self) -> &Filter {
		&self.filter
	}

	pub fn matched(&self) -> &[Entity] {
		&self.matched
	}

	#[inline(always)]
	pub fn contains(&self, entity: Entity) -> bool {
		self.members.get(entity.index())
	}

	pub fn insert(&mut self, entity: Entity) {
		debug_assert!(!self.contains(entity));
		self.members.set(entity.index(), true);
		self.matched.push(entity);
	}

	/// Remove `entity` while keeping the relative order of the others.
	pub fn evict(&mut self, entity: Entity) {
		self.members.set(entity.index(), false);
		self.matched.retain(|e| *e != entity);
	}
}
