//! # Metal Structure
//!
//! A terminal-based calculator for metal structures built from cylinders,
//! cubes and rectangular prisms in aluminum or iron.
//!
//! ## Features
//!
//! - Load a semicolon-separated piece list
//! - Total weight, total volume and volume per shape type
//! - Paint cans (5 l, 2 l, 0.5 l) needed to coat the whole structure
//! - Area and dimensions report, sorted by piece name
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use metal_structure::parser::load_structure;
//!
//! let structure = load_structure("csv/MetalStructure.csv").expect("Failed to load");
//! println!("Weight: {} Kg", structure.total_weight());
//! println!("Cans: {:?}", structure.paint_can_counts().as_array());
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod report;
pub mod ui;
