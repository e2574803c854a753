use crate::components::Component;
use std::any::Any;

/// Type-erased view of a [ComponentColumn], letting the store
/// drop components of a kind only known at runtime.
pub(crate) trait AnyColumn {
	/// Drop the component stored at `index`, returning whether one was present.
	fn remove_any(&mut self, index: usize) -> bool;

	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for every instance of one [Component] kind, indexed by entity index.
pub(crate) struct ComponentColumn<T: Component> {
	values: Vec<Option<T>>,
}

impl<T: Component> ComponentColumn<T> {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
		}
	}

	/// Store `value` at `index`, returning the component it replaced.
	pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
		if self.values.len() <= index {
			self.values.resize_with(index + 1, || None);
		}
		self.values[index].replace(value)
	}

	pub fn remove(&mut self, index: usize) -> Option<T> {
		self.values.get_mut(index).and_then(Option::take)
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.values.get(index).and_then(Option::as_ref)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		self.values.get_mut(index).and_then(Option::as_mut)
	}
}

impl<T: Component> AnyColumn for ComponentColumn<T> {
	fn remove_any(&mut self, index: usize) -> bool {
		self.remove(index).is_some()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
