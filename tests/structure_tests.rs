//! End-to-end tests: load the bundled piece list, aggregate, report, export.

use metal_structure::error::{ParseError, StructureError};
use metal_structure::export::{export_csv, export_json};
use metal_structure::model::{Material, Piece, Structure};
use metal_structure::parser::load_structure;
use metal_structure::report::{full_report, MetalStructure, StructureMetrics};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("csv/MetalStructure.csv")
}

fn sample() -> Structure {
    load_structure(sample_path()).expect("bundled piece list loads")
}

// ─── Loading ─────────────────────────────────────────────────

#[test]
fn bundled_list_loads_every_row() {
    let structure = sample();
    assert_eq!(structure.len(), 6);
    assert_eq!(
        structure.piece(3),
        Some(&Piece::cylinder(2, Material::Aluminum, 0.05, 2.5))
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_structure("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, ParseError::FileRead { .. }));
}

// ─── Aggregation ─────────────────────────────────────────────

#[test]
fn totals_of_bundled_list() {
    let structure = sample();
    assert_eq!(structure.total_piece_count(), 26);
    assert_eq!(structure.total_volume(), 108.66);
    // only the aluminum prisms (0.16) and iron cubes (0.37) weigh a rounded 0.01 or more
    assert_eq!(structure.total_weight(), 0.53);
    assert_eq!(structure.total_paint_litres(), 271.21);
    assert_eq!(structure.paint_can_counts().as_array(), [3, 0, 54]);
}

#[test]
fn per_shape_totals_of_bundled_list() {
    let structure = sample();
    assert_eq!(structure.total_piece_count_of(1), 6);
    assert_eq!(structure.total_piece_count_of(2), 7);
    assert_eq!(structure.total_piece_count_of(3), 13);
    assert_eq!(structure.total_volume_of(1), 0.42);
    assert_eq!(structure.total_volume_of(2), 48.13);
    assert_eq!(structure.total_volume_of(3), 60.12);
}

#[test]
fn report_order_is_alphabetical_and_stable() {
    let structure = sample();
    let order: Vec<(&str, u32)> = structure
        .sorted_pieces()
        .iter()
        .map(|p| (p.name.as_str(), p.quantity))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Cube", 6),
            ("Cube", 1),
            ("Cylinder", 4),
            ("Cylinder", 2),
            ("RectangularPrism", 10),
            ("RectangularPrism", 3),
        ]
    );
}

// ─── Strict façade ───────────────────────────────────────────

#[test]
fn facade_is_strict_where_aggregator_is_permissive() {
    let metal = MetalStructure::new(sample());

    assert_eq!(metal.shape_volume(2), Ok(48.13));
    assert_eq!(
        metal.shape_volume(0),
        Err(StructureError::InvalidShapeType { code: 0 })
    );
    assert_eq!(
        metal.shape_volume(4),
        Err(StructureError::InvalidShapeType { code: 4 })
    );
    assert_eq!(metal.structure().total_volume_of(4), 0.0);
    assert_eq!(metal.structure().total_piece_count_of(0), 0);
}

#[test]
fn full_report_mentions_totals() {
    let report = full_report(&MetalStructure::new(sample())).unwrap();
    assert!(report.contains("Total weight: 0.53 Kg"));
    assert!(report.contains("Total volume: 108.66 m³"));
    assert!(report.contains("5 litres: 54 can(s)"));
    assert!(report.contains("0.5 litres: 3 can(s)"));
    assert!(report.contains("- Total pieces: 26 piece(s)."));
}

// ─── Export ──────────────────────────────────────────────────

#[test]
fn exports_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let structure = sample();

    let csv_path = dir.path().join("pieces.csv");
    export_csv(&structure, &csv_path).unwrap();
    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), 7);
    assert!(csv_text.lines().nth(1).unwrap().starts_with("Cube,Cube,Iron,6,"));

    let json_path = dir.path().join("summary.json");
    export_json(&structure, &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["total_pieces"], 26);
    assert_eq!(value["pieces"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["paint_cans"]["five_litre"], 54);
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("pieces.csv");
    assert!(export_csv(&sample(), path).is_err());
}
