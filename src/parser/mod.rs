pub mod pieces;

pub use crate::error::ParseError;
pub use pieces::{load_structure, load_structure_with, read_structure, LoadOptions};
