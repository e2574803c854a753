mod bit_field;
mod component_column;

pub use bit_field::*;

pub(crate) use component_column::*;
