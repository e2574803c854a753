use crate::tests::components::{position, sprite, velocity, Position, Sprite, Target, Velocity};
use crate::entities::{Entity, EntityStore};
use crate::systems::{Filter, System};
use std::cell::RefCell;
use crate::Registry;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<(&'static str, Vec<u32>)>>>;

/// Records the entities it was handed on every run.
struct Recorder {
	name: &'static str,
	log: Log,
}

impl System for Recorder {
	fn run(&mut self, _: &mut EntityStore, entities: &[Entity], _: Option<f64>) {
		let ids = entities.iter().map(|e| e.id()).collect();
		self.log.borrow_mut().push((self.name, ids));
	}
}

fn recorder(name: &'static str, log: &Log) -> Recorder {
	Recorder {
		name,
		log: log.clone(),
	}
}

#[test]
pub fn systems_run_in_registration_order() {
	let log = Log::default();
	let mut registry = Registry::new();
	registry.spawn().with(position(0.0, 0.0));

	registry.add_system(Filter::of::<(Position,)>(), recorder("a", &log));
	registry.add_system(Filter::of::<(Position,)>(), recorder("b", &log));
	registry.add_system(Filter::of::<(Position,)>(), recorder("c", &log));

	registry.tick(None);
	registry.tick(None);

	let names = log.borrow().iter().map(|(name, _)| *name).collect::<Vec<_>>();
	assert_eq!(names, ["a", "b", "c", "a", "b", "c"]);
	assert_eq!(registry.tick_count(), 2);
}

#[test]
pub fn dt_is_passed_through_unchanged() {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let mut registry = Registry::new();

	let sink = seen.clone();
	registry.add_system(Filter::empty(), move |_: &mut EntityStore, _: &[Entity], dt: Option<f64>| {
		sink.borrow_mut().push(dt);
	});

	registry.tick(None);
	registry.tick(Some(0.016));
	registry.tick_with(-3.5);

	assert_eq!(*seen.borrow(), [None, Some(0.016), Some(-3.5)]);
}

#[test]
pub fn movement_updates_component_data() {
	let mut registry = Registry::new();
	let ship = registry.spawn().with(position(10.0, 10.0)).with(velocity(1.0, 2.0)).id();
	let rock = registry.spawn().with(position(0.0, 0.0)).id();

	registry.add_system(
		Filter::of::<(Position, Velocity)>(),
		|store: &mut EntityStore, entities: &[Entity], dt: Option<f64>| {
			let dt = dt.unwrap_or(1.0) as f32;
			for entity in entities {
				let velocity = *store.get_component::<Velocity>(*entity).unwrap();
				let position = store.get_component_mut::<Position>(*entity).unwrap();
				position.x += velocity.x * dt;
				position.y += velocity.y * dt;
			}
		},
	);

	registry.tick(None);
	registry.tick_with(0.5);

	assert_eq!(registry.get_component::<Position>(ship), Some(&position(11.5, 13.0)));
	assert_eq!(registry.get_component::<Position>(rock), Some(&position(0.0, 0.0)));
}

#[test]
pub fn mutations_are_visible_to_later_systems_in_the_same_tick() {
	let log = Log::default();
	let mut registry = Registry::new();
	let a = registry.spawn().with(position(0.0, 0.0)).with(sprite()).id();
	registry.spawn().with(position(0.0, 0.0)).with(sprite());

	registry.add_system(
		Filter::of::<(Sprite,)>(),
		move |store: &mut EntityStore, _: &[Entity], _: Option<f64>| {
			store.remove_component::<Sprite>(a);
		},
	);
	registry.add_system(Filter::of::<(Position, Sprite)>(), recorder("render", &log));
	registry.add_system(Filter::of::<(Position,)>(), recorder("all", &log));

	registry.tick(None);

	assert_eq!(*log.borrow(), [("render", vec![2]), ("all", vec![1, 2])]);
}

#[test]
pub fn a_running_system_keeps_its_captured_list() {
	let visited = Rc::new(RefCell::new(Vec::new()));
	let mut registry = Registry::new();
	let system = registry.add_system(Filter::of::<(Sprite,)>(), {
		let visited = visited.clone();
		move |store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
			for entity in entities {
				visited.borrow_mut().push(entity.id());
				store.remove_component::<Sprite>(*entity);
			}
		}
	});

	for _ in 0..3 {
		registry.spawn().with(sprite());
	}

	registry.tick(None);
	assert_eq!(*visited.borrow(), [1, 2, 3], "Removing from the own list must not skip entities");
	assert!(registry.matched(system).is_empty());

	registry.tick(None);
	assert_eq!(visited.borrow().len(), 3);
}

#[test]
pub fn targeting_removes_target_on_arrival() {
	let mut registry = Registry::new();
	let seeker = registry
		.spawn()
		.with(position(0.0, 0.0))
		.with(velocity(1.0, 0.0))
		.with(Target { x: 2.0, y: 0.0 })
		.id();

	let targeting = registry.add_system(
		Filter::of::<(Target, Position, Velocity)>(),
		|store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
			for entity in entities {
				let target = *store.get_component::<Target>(*entity).unwrap();
				let position = store.get_component::<Position>(*entity).unwrap();
				if (target.x - position.x).abs() < 0.01 && (target.y - position.y).abs() < 0.01 {
					store.remove_component::<Target>(*entity);
				}
			}
		},
	);
	let movement = registry.add_system(
		Filter::of::<(Position, Velocity)>(),
		|store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
			for entity in entities {
				let velocity = *store.get_component::<Velocity>(*entity).unwrap();
				let position = store.get_component_mut::<Position>(*entity).unwrap();
				position.x += velocity.x;
				position.y += velocity.y;
			}
		},
	);

	registry.tick(None);
	registry.tick(None);
	assert_eq!(registry.matched(targeting), [seeker]);

	registry.tick(None);
	assert!(registry.matched(targeting).is_empty(), "Target reached, the entity leaves the targeting list");
	assert_eq!(registry.matched(movement), [seeker], "The sibling binding keeps the entity");
	assert!(!registry.has_component::<Target>(seeker));
}

#[test]
pub fn systems_can_attach_components() {
	let log = Log::default();
	let mut registry = Registry::new();
	registry.spawn().with(position(0.0, 0.0));
	registry.spawn().with(position(0.0, 0.0));

	registry.add_system(
		Filter::of::<(Position,)>(),
		|store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
			for entity in entities {
				store.entity_mut(*entity).with(velocity(1.0, 1.0));
			}
		},
	);
	registry.add_system(Filter::of::<(Position, Velocity)>(), recorder("moving", &log));

	registry.tick(None);
	assert_eq!(*log.borrow(), [("moving", vec![1, 2])]);
}
