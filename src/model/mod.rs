pub mod material;
pub mod paint;
pub mod piece;
pub mod structure;
pub mod units;

pub use material::{Material, MATERIALS};
pub use paint::{allocate, PaintCans};
pub use piece::{Dimension, Piece, Shape, ShapeType};
pub use structure::{piece_weight, round2, Structure};
