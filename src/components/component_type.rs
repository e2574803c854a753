use crate::components::ComponentId;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

/// Plain data that can be attached to an [entity](crate::entities::Entity).
///
/// Implement it with #\[derive([`Component`](sift_ecs_derive::Component))].
/// Generic types are not supported by the derive, as every instantiation would share one id.
pub trait Component: 'static {
	/// The kind identifier shared by every instance of this type.
	fn component_id() -> ComponentId;

	/// A human readable name used in logs and debug output.
	fn component_name() -> &'static str {
		short_type_name(std::any::type_name::<Self>())
	}
}

/// A runtime representation of a type implementing the [`Component`] trait.
#[derive(Copy, Clone)]
pub struct ComponentType {
	id: ComponentId,
	name: &'static str,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			id: ComponentId::of::<T>(),
			name: T::component_name(),
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl Debug for ComponentType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.name, self.id)
	}
}

/// Strip the module path, keeping generic arguments intact.
fn short_type_name(full: &str) -> &str {
	let end = full.find('<').unwrap_or(full.len());
	match full[..end].rfind("::") {
		Some(i) => &full[i + 2..],
		None => full,
	}
}

#[cfg(test)]
mod tests {
	use super::short_type_name;

	#[test]
	fn short_names_drop_the_module_path() {
		assert_eq!(short_type_name("game::components::Position"), "Position");
		assert_eq!(short_type_name("Position"), "Position");
		assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper<b::Inner>");
	}
}
