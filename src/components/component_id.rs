//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! [Component ids](ComponentId) are used as bit indices in the
//! [bitfields](crate::data_structures::BitField) behind [filters](crate::systems::Filter)
//! and entity signatures.

use std::sync::atomic::Ordering::Relaxed;
use crate::data_structures::BitField;
use std::sync::atomic::AtomicUsize;
use crate::components::Component;
use std::fmt::{Display, Formatter};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A process-wide identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	#[inline(always)]
	pub(crate) const fn value(&self) -> usize {
		self.value
	}
}

impl Display for ComponentId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.value)
	}
}

impl From<&[ComponentId]> for BitField {
	fn from(ids: &[ComponentId]) -> Self {
		let mut bitfield = BitField::new();
		for id in ids {
			bitfield.set(id.value(), true);
		}

		bitfield
	}
}

/// Generates a new [ComponentId]. **Should not be called from user code.**
///
/// Called once per component type by the code #\[derive([Component])] generates.
#[doc(hidden)]
pub fn next_component_id() -> ComponentId {
	let value = NEXT_ID.fetch_add(1, Relaxed);
	debug_assert!(
		value <= u32::MAX as usize,
		"This is an insane number of components. Please seek help."
	);
	ComponentId { value }
}
