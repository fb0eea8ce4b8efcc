//! Plain-text reports printed by `--report` and shown in the viewer.

use super::metrics::{MetalStructure, StructureMetrics};
use crate::error::StructureError;
use crate::model::{units, ShapeType, Structure};

const INDENT_1: &str = "          ";
const INDENT_2: &str = "                    ";
const INDENT_3: &str = "                              ";

/// Weight, volume, paint cans and volume per shape type.
pub fn structure_report<M: StructureMetrics>(metrics: &M) -> Result<String, StructureError> {
    let cans = metrics.paint_cans();
    let mut lines = vec![
        String::new(),
        format!("{INDENT_1}- STRUCTURE:"),
        format!(
            "{INDENT_2}Total weight: {:.2} {}",
            metrics.total_weight(),
            units::WEIGHT
        ),
        format!(
            "{INDENT_2}Total volume: {:.2} {}",
            metrics.total_volume(),
            units::VOLUME
        ),
        format!("{INDENT_2}Paint cans needed to paint the structure:"),
        format!("{INDENT_3}5 litres: {} can(s)", cans.five_litre),
        format!("{INDENT_3}2 litres: {} can(s)", cans.two_litre),
        format!("{INDENT_3}0.5 litres: {} can(s)", cans.half_litre),
        String::new(),
        format!("{INDENT_1}- TOTAL VOLUME BY PIECE TYPE:"),
    ];

    for shape in ShapeType::ALL {
        let volume = metrics.shape_volume(shape.code())?;
        lines.push(format!(
            "{INDENT_2}{}: {volume:.2} {}",
            shape.name(),
            units::VOLUME
        ));
    }

    Ok(join_lines(&lines))
}

/// Piece counts, area and dimensions, and the first registered piece.
#[must_use]
pub fn pieces_report(structure: &Structure) -> String {
    let mut lines = vec![
        String::new(),
        format!("- Total pieces: {} piece(s).", structure.total_piece_count()),
    ];
    lines.extend(ShapeType::ALL.into_iter().map(|shape| {
        format!(
            "{INDENT_1}{}: {} unit(s)",
            shape.name(),
            structure.total_piece_count_of(shape.code())
        )
    }));
    lines.push(String::new());
    lines.push("- AREA AND DIMENSIONS:".to_string());

    let mut out = join_lines(&lines);
    out.push_str(&structure.area_and_dimensions_report());
    out.push_str("- First registered piece:\n");
    match structure.piece(0) {
        // Piece's Display already ends with a newline
        Some(piece) => out.push_str(&format!("{INDENT_1}{piece}")),
        None => out.push_str(&format!("{INDENT_1}(none)\n")),
    }

    out
}

/// Every piece with its material, alphabetically.
#[must_use]
pub fn piece_listing(structure: &Structure) -> String {
    let mut out = String::from("- List of pieces used in the structure:\n");
    for piece in structure.sorted_pieces() {
        out.push_str(&format!("{INDENT_1}{piece}\n"));
    }
    out
}

/// Everything `--report` prints, in order.
pub fn full_report(metal: &MetalStructure) -> Result<String, StructureError> {
    let mut out = piece_listing(metal.structure());
    out.push_str(&pieces_report(metal.structure()));
    out.push_str(&structure_report(metal)?);
    Ok(out)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
