pub mod metrics;
pub mod text;

pub use crate::error::StructureError;
pub use metrics::{MetalStructure, StructureMetrics};
pub use text::{full_report, piece_listing, pieces_report, structure_report};
