use crate::error::{ParseError, StructureError};
use crate::model::{Material, Piece, Shape, ShapeType, Structure};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

// Column layout of a piece list row
const SHAPE: usize = 0;
const QUANTITY: usize = 1;
const MATERIAL: usize = 2;
const RADIUS: usize = 3;
const HEIGHT: usize = 4;
const WIDTH: usize = 5;
const DEPTH: usize = 6;
const EDGE: usize = 7;

/// Dimension columns read for each shape, in `Shape::dimensions` order.
const fn dimension_columns(shape: ShapeType) -> &'static [(usize, &'static str)] {
    match shape {
        ShapeType::Cylinder => &[(RADIUS, "radius"), (HEIGHT, "height")],
        ShapeType::Cube => &[(EDGE, "edge")],
        ShapeType::RectangularPrism => &[(HEIGHT, "height"), (WIDTH, "width"), (DEPTH, "depth")],
    }
}

/// How a piece list is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            has_headers: true,
        }
    }
}

/// Loads a semicolon-separated piece list into a [`Structure`].
///
/// The first row is a header. Each following row reads
/// `shape;quantity;material;radius;height;width;depth;edge`, and only the
/// dimension columns the shape needs have to be filled in. Rows with an empty
/// shape or material cell are skipped.
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be opened,
/// [`ParseError::InvalidPiece`] for an unknown shape or material and
/// [`ParseError::InvalidNumber`] / [`ParseError::MissingField`] for bad cells.
///
/// # Example
///
/// ```no_run
/// use metal_structure::parser::load_structure;
///
/// let structure = load_structure("csv/MetalStructure.csv")?;
/// println!("Weight: {} Kg", structure.total_weight());
/// # Ok::<(), metal_structure::error::ParseError>(())
/// ```
pub fn load_structure<P: AsRef<Path>>(path: P) -> Result<Structure, ParseError> {
    load_structure_with(path, LoadOptions::default())
}

/// Same as [`load_structure`] with an explicit layout.
pub fn load_structure_with<P: AsRef<Path>>(
    path: P,
    options: LoadOptions,
) -> Result<Structure, ParseError> {
    let path_ref = path.as_ref();
    let file = std::fs::File::open(path_ref).map_err(|source| ParseError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let structure = read_structure(file, options)?;
    info!(
        path = %path_ref.display(),
        pieces = structure.len(),
        "loaded piece list"
    );
    Ok(structure)
}

/// Reads a piece list from any reader.
pub fn read_structure<R: Read>(reader: R, options: LoadOptions) -> Result<Structure, ParseError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut structure = Structure::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        match parse_record(&record, line)? {
            Some(piece) => {
                debug!(line, name = %piece.name, quantity = piece.quantity, "parsed piece");
                structure.add_piece(piece);
            }
            None => warn!(line, "skipping row without shape or material"),
        }
    }

    Ok(structure)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Option<Piece>, ParseError> {
    let shape = cell(record, SHAPE);
    let material = cell(record, MATERIAL);
    let (Some(shape_name), Some(material_name)) = (shape, material) else {
        return Ok(None);
    };

    let invalid = |source| ParseError::InvalidPiece { line, source };

    // Shape and material names are checked before any numeric cell.
    let shape_type = ShapeType::from_name(shape_name).ok_or_else(|| {
        invalid(StructureError::InvalidShapeName {
            name: shape_name.to_string(),
        })
    })?;
    let material = Material::from_name(material_name).ok_or_else(|| {
        invalid(StructureError::InvalidMaterial {
            name: material_name.to_string(),
        })
    })?;

    let quantity_text = required(record, QUANTITY, "quantity", line)?;
    let quantity: u32 = quantity_text
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            line,
            field: "quantity",
            value: quantity_text.to_string(),
        })?;

    let values = dimension_columns(shape_type)
        .iter()
        .map(|&(index, field)| {
            let text = required(record, index, field, line)?;
            text.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line,
                field,
                value: text.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, ParseError>>()?;

    Ok(Some(Piece::new(
        quantity,
        material,
        Shape::from_values(shape_type, &values),
    )))
}

fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|s| !s.is_empty())
}

fn required<'r>(
    record: &'r StringRecord,
    index: usize,
    field: &'static str,
    line: u64,
) -> Result<&'r str, ParseError> {
    cell(record, index).ok_or(ParseError::MissingField { line, field })
}
