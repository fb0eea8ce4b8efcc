//! Error types for Metal Structure.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the structure model and its strict entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// Shape-type code outside Cylinder=1, Cube=2, RectangularPrism=3.
    #[error("invalid shape type code {code} (expected 1, 2 or 3)")]
    InvalidShapeType { code: i32 },

    /// Material name matches neither Aluminum nor Iron.
    #[error("invalid material '{name}'")]
    InvalidMaterial { name: String },

    /// Shape name matches none of the known shapes.
    #[error("invalid shape '{name}'")]
    InvalidShapeName { name: String },
}

/// Errors that can occur when loading a piece list.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the piece list from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The delimited text itself could not be read.
    #[error("malformed CSV: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A column required by the row's shape is absent.
    #[error("line {line}: missing field '{field}'")]
    MissingField { line: u64, field: &'static str },

    /// A quantity or dimension cell is not a number.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// The row names an unknown shape or material.
    #[error("line {line}: {source}")]
    InvalidPiece {
        line: u64,
        source: StructureError,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
