use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::cmp::Ordering;
use std::iter::repeat;

const BITS: usize = 32;
const FIRST_BIT: u32 = 1 << (BITS - 1);

/// A dynamically sized bit-field.
///
/// Bits past the end of the backing storage read as unset,
/// so two bitfields with the same set bits compare equal regardless of capacity.
#[derive(Default, Clone)]
pub struct BitField {
	values: Vec<u32>,
}

impl BitField {
	/// Create a new [BitField].
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a new [BitField] with the specified capacity.
	///
	/// # Arguments
	/// * `capacity` - A usize representing the container's target capacity in bits
	pub fn with_capacity(capacity: usize) -> Self {
		let mut instance = Self { values: Vec::new() };
		instance.ensure_capacity(capacity);
		instance
	}

	/// Get the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to retrieve
	#[inline(always)]
	pub fn get(&self, i: usize) -> bool {
		let (position, shift) = Self::pos_shift(i);
		match self.values.get(position) {
			Some(bits) => (bits & (FIRST_BIT >> shift)) != 0,
			None => false,
		}
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the element to modify
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		let (position, shift) = Self::pos_shift(i);
		let bit = FIRST_BIT >> shift;

		match value {
			true => {
				if self.values.len() <= position {
					self.extend_to_position(position);
				}
				self.values[position] |= bit;
			},

			false => {
				if let Some(bits) = self.values.get_mut(position) {
					*bits &= !bit;
				}
			},
		}
	}

	/// Check if the [BitField] is a subset of another [BitField].
	/// The empty set is a subset of every [BitField].
	///
	/// # Arguments
	/// * `other` - The bitfield to check against
	pub fn is_subset_of(&self, other: &BitField) -> bool {
		self.values.iter().enumerate().all(|(i, mask)| {
			let bits = other.values.get(i).copied().unwrap_or(0);
			(bits & *mask) == *mask
		})
	}

	/// Returns true if no bit is set.
	pub fn is_empty(&self) -> bool {
		self.values.iter().all(|v| *v == 0)
	}

	/// Count the set bits.
	pub fn count_ones(&self) -> usize {
		self.values.iter().map(|v| v.count_ones() as usize).sum()
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.values.fill(0);
	}

	/// Set the minimum capacity of the [BitField].
	/// # Arguments
	/// * `capacity` - A usize representing the container's minimum capacity in bits
	pub fn ensure_capacity(&mut self, capacity: usize) {
		if self.values.len() * BITS < capacity {
			let count = (capacity + BITS - 1) / BITS - self.values.len();
			self.values.extend(repeat(0).take(count));
		}
	}

	/// Get the [BitField]'s capacity in bits.
	pub fn capacity(&self) -> usize {
		self.values.len() * BITS
	}

	/// Iterate over the indices of the set bits in ascending order.
	pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
		self.values.iter().enumerate().flat_map(|(position, bits)| {
			let bits = *bits;
			(0..BITS).filter(move |shift| bits & (FIRST_BIT >> shift) != 0).map(move |shift| position * BITS + shift)
		})
	}

	#[inline(never)]
	fn extend_to_position(&mut self, position: usize) {
		let count = position - self.values.len() + 1;
		self.values.extend(repeat(0).take(count));
	}

	#[inline(always)]
	fn pos_shift(a: usize) -> (usize, usize) {
		(a / BITS, a % BITS)
	}
}

impl From<&[u32]> for BitField {
	fn from(values: &[u32]) -> Self {
		Self {
			values: Vec::from(values),
		}
	}
}

impl Eq for BitField {}

impl PartialEq<Self> for BitField {
	fn eq(&self, other: &Self) -> bool {
		match self.values.len().cmp(&other.values.len()) {
			Ordering::Equal => self.values.eq(&other.values),
			Ordering::Less => {
				self.values.eq(&other.values[0..self.values.len()])
					&& other.values[self.values.len()..].iter().all(|i| *i == 0)
			},
			Ordering::Greater => {
				self.values[0..other.values.len()].eq(&other.values)
					&& self.values[other.values.len()..].iter().all(|i| *i == 0)
			},
		}
	}
}

impl Hash for BitField {
	fn hash<H: Hasher>(&self, state: &mut H) {
		let last = self.values.iter().rposition(|v| *v != 0);
		if let Some(last) = last {
			for i in &self.values[0..=last] {
				i.hash(state);
			}
		}
	}
}

impl Debug for BitField {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.iter_ones()).finish()
	}
}
