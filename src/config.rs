/// Capacity hints for a [Registry](crate::Registry).
///
/// None of these are limits; the registry grows past them as needed.
#[derive(Default, Clone, Copy, Debug)]
pub struct RegistryConfig {
	/// Number of entities to reserve room for, in the entity list, component columns and membership sets.
	pub entity_capacity: usize,
	/// Number of systems to reserve room for.
	pub system_capacity: usize,
}

impl RegistryConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
		self.entity_capacity = capacity;
		self
	}

	pub fn with_system_capacity(mut self, capacity: usize) -> Self {
		self.system_capacity = capacity;
		self
	}
}
