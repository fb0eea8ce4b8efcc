use crate::error::ExportError;
use crate::model::{PaintCans, Piece, ShapeType, Structure};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Totals for one shape type.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeTotals {
    pub shape: ShapeType,
    pub code: i32,
    pub count: u64,
    pub volume: f64,
}

/// Everything computed for a structure, ready to serialize.
#[derive(Debug, Clone, Serialize)]
pub struct StructureSummary<'a> {
    pub total_pieces: u64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub paint_litres: f64,
    pub paint_cans: PaintCans,
    pub shapes: Vec<ShapeTotals>,
    pub pieces: Vec<&'a Piece>,
}

impl<'a> StructureSummary<'a> {
    #[must_use]
    pub fn new(structure: &'a Structure) -> Self {
        let shapes = ShapeType::ALL
            .into_iter()
            .map(|shape| ShapeTotals {
                shape,
                code: shape.code(),
                count: structure.total_piece_count_of(shape.code()),
                volume: structure.total_volume_of(shape.code()),
            })
            .collect();

        Self {
            total_pieces: structure.total_piece_count(),
            total_weight: structure.total_weight(),
            total_volume: structure.total_volume(),
            paint_litres: structure.total_paint_litres(),
            paint_cans: structure.paint_can_counts(),
            shapes,
            pieces: structure.sorted_pieces(),
        }
    }
}

pub fn export_json<P: AsRef<Path>>(structure: &Structure, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(&StructureSummary::new(structure))?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    info!(path = %path_ref.display(), "exported JSON");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Material;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn summary_serializes_totals_and_pieces() {
        let mut structure = Structure::new();
        structure.add_piece(Piece::cube(2, Material::Aluminum, 1.0));
        structure.add_piece(Piece::cube(1, Material::Iron, 1.0));

        // paint: 0.5 * 2 * 6 + 0.7 * 6 = 10.2 L
        let value = serde_json::to_value(StructureSummary::new(&structure)).unwrap();

        assert_eq!(value["total_pieces"], json!(3));
        assert_eq!(value["total_weight"], json!(0.02));
        assert_eq!(value["total_volume"], json!(3.0));
        assert_eq!(
            value["paint_cans"],
            json!({ "half_litre": 1, "two_litre": 0, "five_litre": 2 })
        );
        assert_eq!(
            value["shapes"][1],
            json!({ "shape": "Cube", "code": 2, "count": 3, "volume": 3.0 })
        );
        assert_eq!(
            value["pieces"][0],
            json!({
                "name": "Cube",
                "quantity": 2,
                "material": "Aluminum",
                "shape": "Cube",
                "edge": 1.0
            })
        );
    }
}
