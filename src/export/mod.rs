pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_csv, write_csv};
pub use json::{export_json, StructureSummary};
