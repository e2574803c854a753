//! Coloured boxes drifting around a small surface.
//!
//! Click on a box to select it, click on empty space to send the selected boxes there.
//! Rendering goes to a character grid printed every few frames.
//!
//! Run with `RUST_LOG=debug cargo run --example boxes` to watch the registry at work.

use sift_ecs::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const WIDTH: usize = 400;
const HEIGHT: usize = 300;
const FRAME: f64 = 1.0 / 60.0;
const SPEED: f32 = 120.0;

#[derive(Component, Clone, Copy, Debug)]
struct Position {
	x: f32,
	y: f32,
}

#[derive(Component, Clone, Copy, Debug)]
struct Velocity {
	x: f32,
	y: f32,
}

#[derive(Component, Clone, Copy, Debug)]
struct Sprite {
	size: f32,
	glyph: char,
}

#[derive(Component, Clone, Copy, Debug, Default)]
struct Selectable {
	selected: bool,
}

#[derive(Component, Clone, Copy, Debug)]
struct Target {
	x: f32,
	y: f32,
}

/// A 2-D drawing surface of fixed size.
trait Surface {
	fn width(&self) -> usize;
	fn height(&self) -> usize;
	fn clear(&mut self);
	fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, glyph: char);
}

/// Draws into a coarse character grid, one cell per `scale` pixels.
struct TextSurface {
	width: usize,
	height: usize,
	scale: usize,
	cells: Vec<char>,
}

impl TextSurface {
	fn new(width: usize, height: usize, scale: usize) -> Self {
		Self {
			width,
			height,
			scale,
			cells: vec!['.'; (width / scale) * (height / scale)],
		}
	}

	fn columns(&self) -> usize {
		self.width / self.scale
	}

	fn render(&self) -> String {
		self.cells
			.chunks(self.columns())
			.map(|row| row.iter().collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}
}

impl Surface for TextSurface {
	fn width(&self) -> usize {
		self.width
	}

	fn height(&self) -> usize {
		self.height
	}

	fn clear(&mut self) {
		self.cells.fill('.');
	}

	fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, glyph: char) {
		let columns = self.columns();
		let rows = self.height / self.scale;
		let scale = self.scale;
		let to_cell = |v: f32, limit: usize| ((v.max(0.0) as usize) / scale).min(limit);

		for row in to_cell(y, rows)..to_cell(y + h, rows) {
			for column in to_cell(x, columns)..to_cell(x + w, columns) {
				self.cells[row * columns + column] = glyph;
			}
		}
	}
}

fn render_system(surface: Rc<RefCell<TextSurface>>) -> impl System {
	move |store: &mut EntityStore, entities: &[Entity], _: Option<f64>| {
		let mut surface = surface.borrow_mut();
		surface.clear();
		for entity in entities {
			let (Some(position), Some(sprite)) = (
				store.get_component::<Position>(*entity),
				store.get_component::<Sprite>(*entity),
			) else {
				continue;
			};

			let glyph = match store.get_component::<Selectable>(*entity) {
				Some(s) if s.selected => sprite.glyph.to_ascii_uppercase(),
				_ => sprite.glyph,
			};
			surface.fill_rect(position.x, position.y, sprite.size, sprite.size, glyph);
		}
	}
}

fn movement_system(store: &mut EntityStore, entities: &[Entity], dt: Option<f64>) {
	let dt = dt.unwrap_or(FRAME) as f32;
	for entity in entities {
		let Some(mut velocity) = store.get_component::<Velocity>(*entity).copied() else {
			continue;
		};
		let Some(position) = store.get_component_mut::<Position>(*entity) else {
			continue;
		};

		position.x += velocity.x * dt;
		position.y += velocity.y * dt;

		if position.x < 0.0 || position.x > WIDTH as f32 {
			velocity.x = -velocity.x;
			position.x = position.x.clamp(0.0, WIDTH as f32);
		}
		if position.y < 0.0 || position.y > HEIGHT as f32 {
			velocity.y = -velocity.y;
			position.y = position.y.clamp(0.0, HEIGHT as f32);
		}

		store.add_component(*entity, velocity);
	}
}

fn targeting_system(store: &mut EntityStore, entities: &[Entity], dt: Option<f64>) {
	let step = SPEED * dt.unwrap_or(FRAME) as f32;
	for entity in entities {
		let (Some(target), Some(position)) = (
			store.get_component::<Target>(*entity).copied(),
			store.get_component::<Position>(*entity).copied(),
		) else {
			continue;
		};

		let (dx, dy) = (target.x - position.x, target.y - position.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance <= step {
			log::info!("{} reached ({}, {})", entity, target.x, target.y);
			store.add_component(*entity, Position { x: target.x, y: target.y });
			store.add_component(*entity, Velocity { x: 0.0, y: 0.0 });
			store.remove_component::<Target>(*entity);
		} else {
			let scale = SPEED / distance;
			store.add_component(*entity, Velocity { x: dx * scale, y: dy * scale });
		}
	}
}

fn selection_system(input: &mut PointerState, store: &mut EntityStore, entities: &[Entity], _: Option<f64>) {
	let Some([x, y]) = input.pending_click else {
		return;
	};

	let hit = entities.iter().copied().find(|entity| {
		match (store.get_component::<Position>(*entity), store.get_component::<Sprite>(*entity)) {
			(Some(p), Some(s)) => x >= p.x && x <= p.x + s.size && y >= p.y && y <= p.y + s.size,
			_ => false,
		}
	});

	match hit {
		Some(entity) => {
			if let Some(selectable) = store.get_component_mut::<Selectable>(entity) {
				selectable.selected = !selectable.selected;
				log::info!("{} selected: {}", entity, selectable.selected);
			}
		},
		None => {
			for entity in entities {
				let selected = store.get_component::<Selectable>(*entity).map_or(false, |s| s.selected);
				if selected {
					store.add_component(*entity, Target { x, y });
				}
			}
		},
	}
}

fn main() {
	env_logger::init();

	let mut registry = Registry::with_config(RegistryConfig::new().with_entity_capacity(8).with_system_capacity(4));

	registry
		.spawn()
		.with(Position { x: 10.0, y: 10.0 })
		.with(Sprite { size: 32.0, glyph: 'm' })
		.with(Velocity { x: 60.0, y: 120.0 })
		.with(Selectable::default());

	registry
		.spawn()
		.with(Position { x: 250.0, y: 250.0 })
		.with(Sprite { size: 32.0, glyph: 'c' })
		.with(Velocity { x: -30.0, y: -180.0 })
		.with(Selectable::default());

	registry
		.spawn()
		.with(Position { x: 200.0, y: 40.0 })
		.with(Sprite { size: 16.0, glyph: 'y' });

	let surface = Rc::new(RefCell::new(TextSurface::new(WIDTH, HEIGHT, 20)));
	let (_, pointer) = registry.add_input_system(Filter::of::<(Position, Sprite, Selectable)>(), selection_system);
	registry.add_system(Filter::of::<(Target, Position, Velocity)>(), targeting_system);
	registry.add_system(Filter::of::<(Position, Velocity)>(), movement_system);
	let render = registry.add_system(Filter::of::<(Position, Sprite)>(), render_system(surface.clone()));

	// Scripted clicks standing in for a pointer device: (frame, x, y).
	let clicks = [(30, 0.0, 0.0), (31, 20.0, 20.0), (90, 300.0, 150.0), (200, 50.0, 250.0)];

	for frame in 0..240 {
		for (at, x, y) in clicks {
			if at == frame {
				pointer.record(|state| state.click(x, y));
			}
		}

		registry.tick_with(FRAME);

		if frame % 60 == 0 {
			println!(
				"frame {} ({} drawn, {}x{})\n{}\n",
				frame,
				registry.matched(render).len(),
				surface.borrow().width(),
				surface.borrow().height(),
				surface.borrow().render()
			);
		}
	}
}
