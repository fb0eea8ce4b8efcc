use serde::Serialize;
use tracing::trace;

use super::paint::{allocate, PaintCans};
use super::piece::{Piece, ShapeType};
use super::units;

/// Rounds half away from zero to two decimal places.
///
/// A zero result is always `+0.0`; summing an empty iterator of `f64` gives `-0.0`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// A metal structure: every piece in the order it was added.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Structure {
    pieces: Vec<Piece>,
}

impl Structure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_piece(&mut self, piece: Piece) {
        trace!(name = %piece.name, quantity = piece.quantity, "adding piece");
        self.pieces.push(piece);
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces sorted by name ignoring case; equal names keep insertion order.
    #[must_use]
    pub fn sorted_pieces(&self) -> Vec<&Piece> {
        let mut sorted: Vec<&Piece> = self.pieces.iter().collect();
        sorted.sort_by_cached_key(|p| p.name.to_lowercase());
        sorted
    }

    fn pieces_of(&self, code: i32) -> impl Iterator<Item = &Piece> {
        let shape = ShapeType::from_code(code);
        self.pieces
            .iter()
            .filter(move |p| shape == Some(p.shape_type()))
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_piece_count(&self) -> u64 {
        self.pieces.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Sum of quantities for one shape-type code; unknown codes count zero.
    #[must_use]
    pub fn total_piece_count_of(&self, code: i32) -> u64 {
        self.pieces_of(code).map(|p| u64::from(p.quantity)).sum()
    }

    /// Total weight in kilograms.
    ///
    /// Each piece's weight is rounded to two decimals before summing and the
    /// sum is rounded again, so many light pieces can add up to less than
    /// their exact combined weight.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        round2(self.pieces.iter().map(piece_weight).sum())
    }

    /// Total volume in cubic metres, rounded to two decimals.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        round2(self.pieces.iter().map(piece_volume).sum())
    }

    /// Total volume of one shape-type code; unknown codes give 0.0.
    #[must_use]
    pub fn total_volume_of(&self, code: i32) -> f64 {
        round2(self.pieces_of(code).map(piece_volume).sum())
    }

    /// Litres of paint needed to coat every unit, rounded to two decimals.
    #[must_use]
    pub fn total_paint_litres(&self) -> f64 {
        round2(
            self.pieces
                .iter()
                .map(|p| p.material.paint_rate() * f64::from(p.quantity) * p.area())
                .sum(),
        )
    }

    #[must_use]
    pub fn paint_can_counts(&self) -> PaintCans {
        allocate(self.total_paint_litres())
    }

    /// Area and dimensions of every piece, alphabetically.
    #[must_use]
    pub fn area_and_dimensions_report(&self) -> String {
        let mut out = String::new();

        for piece in self.sorted_pieces() {
            out.push_str(&format!(
                "{:10}- {} | {} unit(s).\n",
                "", piece.name, piece.quantity
            ));
            out.push_str(&format!(
                "{:20}Area: {:.2} {}\n",
                "",
                piece.area(),
                units::AREA
            ));
            for dimension in piece.dimensions() {
                out.push_str(&format!("{:20}{dimension}\n", ""));
            }
            out.push('\n');
        }

        out
    }
}

fn piece_volume(piece: &Piece) -> f64 {
    f64::from(piece.quantity) * piece.volume()
}

/// Weight of every unit of one piece in kilograms, rounded to two decimals.
#[must_use]
pub fn piece_weight(piece: &Piece) -> f64 {
    round2(piece.material.density() * piece_volume(piece) / 1000.0)
}
