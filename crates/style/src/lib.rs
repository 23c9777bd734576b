pub mod align;
pub mod dimension;
pub mod parsers;

pub use align::{Axis, HorizontalJustify, Justify, VerticalJustify};
pub use dimension::{Dimension, Edges, EdgesInput, SizeInput};
pub use parsers::ValueParseError;
