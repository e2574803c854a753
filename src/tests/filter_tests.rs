use crate::tests::components::{Position, Sprite, Velocity};
use crate::components::{ComponentId, ComponentSet, ComponentType};
use crate::data_structures::BitField;
use crate::systems::Filter;
use std::sync::Arc;

#[test]
pub fn component_ids_are_stable_per_type() {
	assert_eq!(ComponentId::of::<Position>(), ComponentId::of::<Position>());
	assert_ne!(ComponentId::of::<Position>(), ComponentId::of::<Velocity>());
	assert_eq!(ComponentType::of::<Sprite>().name(), "Sprite");
}

#[test]
pub fn component_sets_share_bitfields_regardless_of_order() {
	let a = <(Position, Velocity)>::get_bitfield();
	let b = <(Velocity, Position)>::get_bitfield();
	assert!(Arc::ptr_eq(&a, &b));
	assert_eq!(<()>::get_bitfield().count_ones(), 0);
}

#[test]
pub fn construction_styles_agree() {
	let of = Filter::of::<(Position, Sprite)>();
	let with = Filter::new().with::<Sprite>().with::<Position>();
	let from = Filter::from([ComponentType::of::<Position>(), ComponentType::of::<Sprite>()].as_slice());

	assert_eq!(of, with);
	assert_eq!(of, from);
	assert_eq!(of.len(), 2);
	assert!(of.contains(ComponentId::of::<Position>()));
	assert!(!of.contains(ComponentId::of::<Velocity>()));
	assert_eq!(format!("{:?}", of), "[\"Position\", \"Sprite\"]");
}

#[test]
pub fn duplicates_are_irrelevant() {
	let twice = Filter::of::<(Position, Position, Sprite)>();
	assert_eq!(twice, Filter::of::<(Position, Sprite)>());
	assert_eq!(twice.len(), 2);
	assert_eq!(Filter::new().with::<Position>().with::<Position>().len(), 1);
}

#[test]
pub fn matching() {
	let filter = Filter::of::<(Position, Sprite)>();
	let mut signature = BitField::new();
	assert!(!filter.matches(&signature));

	signature.set(ComponentId::of::<Position>().value(), true);
	signature.set(ComponentId::of::<Velocity>().value(), true);
	assert!(!filter.matches(&signature));

	signature.set(ComponentId::of::<Sprite>().value(), true);
	assert!(filter.matches(&signature));

	assert!(Filter::empty().matches(&BitField::new()), "The empty filter matches everything");
	assert!(Filter::of::<()>().is_empty());
}
