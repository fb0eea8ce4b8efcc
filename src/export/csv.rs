use crate::error::ExportError;
use crate::model::Structure;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn export_csv<P: AsRef<Path>>(structure: &Structure, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(structure, file)?;
    info!(path = %path_ref.display(), pieces = structure.len(), "exported CSV");

    Ok(())
}

/// Writes one row per piece, alphabetically, with its computed area and volume.
pub fn write_csv<W: Write>(structure: &Structure, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "Name",
        "Shape",
        "Material",
        "Quantity",
        "Area (m²)",
        "Volume (m³)",
        "Dimensions",
    ])?;

    for piece in structure.sorted_pieces() {
        let dimensions = piece
            .dimensions()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        writer.write_record([
            piece.name.as_str(),
            piece.shape_type().name(),
            piece.material.name(),
            piece.quantity.to_string().as_str(),
            format!("{:.2}", piece.area()).as_str(),
            format!("{:.2}", piece.volume()).as_str(),
            dimensions.as_str(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
