use std::fmt::{Display, Formatter};

/// A unique handle to an entity.
///
/// Ids start at 1 and grow by one with every entity a [Registry](crate::Registry) creates.
/// Entities are never destroyed, so a handle stays valid for the lifetime of its registry.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct Entity {
	pub(crate) id: u32,
	pub(crate) registry_id: u32,
}

impl Entity {
	/// The entity's id, unique within its registry.
	#[inline(always)]
	pub const fn id(&self) -> u32 {
		self.id
	}

	#[inline(always)]
	pub(crate) const fn index(&self) -> usize {
		(self.id - 1) as usize
	}
}

impl Display for Entity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Entity({})", self.id)
	}
}
