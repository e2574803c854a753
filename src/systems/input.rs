//! Systems driven by input recorded outside of the tick.
//!
//! The driver records events through an [InputSender] whenever they arrive;
//! the owning [InputSystem] hands the accumulated state to its behaviour on the next tick
//! and then calls [InputState::consume], so one-shot values fire exactly once.

use crate::entities::{Entity, EntityStore};
use crate::systems::System;
use std::cell::RefCell;
use std::rc::Rc;

/// State recorded between ticks for an [InputSystem].
pub trait InputState: Default + 'static {
	/// Reset one-shot values after the behaviour has seen them.
	fn consume(&mut self);
}

/// A pending pointer click plus a one-shot trigger flag.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PointerState {
	/// Position of the latest click not yet handled.
	pub pending_click: Option<[f32; 2]>,
	/// Set when a trigger (key press, button) happened since the last tick.
	pub triggered: bool,
}

impl PointerState {
	pub fn click(&mut self, x: f32, y: f32) {
		self.pending_click = Some([x, y]);
	}

	pub fn trigger(&mut self) {
		self.triggered = true;
	}
}

impl InputState for PointerState {
	fn consume(&mut self) {
		self.pending_click = None;
		self.triggered = false;
	}
}

/// The write side of an [InputSystem]'s state, handed to whatever delivers the events.
///
/// Must not be used from inside a tick.
pub struct InputSender<S: InputState> {
	state: Rc<RefCell<S>>,
}

impl<S: InputState> InputSender<S> {
	/// Record an event into the state.
	pub fn record(&self, event: impl FnOnce(&mut S)) {
		event(&mut *self.state.borrow_mut());
	}

	/// A copy of the state as it currently stands.
	pub fn snapshot(&self) -> S
	where
		S: Clone,
	{
		self.state.borrow().clone()
	}
}

impl<S: InputState> Clone for InputSender<S> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
		}
	}
}

/// A [System] owning an [InputState] that is filled between ticks and consumed when the system runs.
pub struct InputSystem<S: InputState, F> {
	state: Rc<RefCell<S>>,
	behavior: F,
}

impl<S, F> InputSystem<S, F>
where
	S: InputState,
	F: FnMut(&mut S, &mut EntityStore, &[Entity], Option<f64>),
{
	/// Create the system along with the [InputSender] feeding it.
	pub fn new(behavior: F) -> (Self, InputSender<S>) {
		let state = Rc::new(RefCell::new(S::default()));
		let sender = InputSender {
			state: state.clone(),
		};
		(Self { state, behavior }, sender)
	}
}

impl<S, F> System for InputSystem<S, F>
where
	S: InputState,
	F: FnMut(&mut S, &mut EntityStore, &[Entity], Option<f64>),
{
	fn run(&mut self, store: &mut EntityStore, entities: &[Entity], dt: Option<f64>) {
		let mut state = self.state.borrow_mut();
		(self.behavior)(&mut *state, store, entities, dt);
		state.consume();
	}
}
