use thiserror::Error;

/// Errors reported by the fallible `try_*` operations.
///
/// Everything else in the registry is total: removing an absent component
/// or attaching one of a kind already present are not errors.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum EcsError {
	#[error("Entity {entity} was created by registry {registry}, not this one")]
	ForeignEntity { entity: u32, registry: u32 },

	#[error("Entity {0} does not exist")]
	UnknownEntity(u32),
}
