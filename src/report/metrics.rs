use crate::error::StructureError;
use crate::model::{PaintCans, ShapeType, Structure};

/// Figures a finished structure reports to the outside.
///
/// Unlike the [`Structure`] aggregations, [`shape_volume`](Self::shape_volume)
/// rejects shape-type codes other than 1, 2 and 3.
pub trait StructureMetrics {
    /// Total weight in Kg.
    fn total_weight(&self) -> f64;

    /// Total volume in m³.
    fn total_volume(&self) -> f64;

    /// Cans needed to paint the whole structure.
    fn paint_cans(&self) -> PaintCans;

    /// Volume in m³ of all pieces of one shape type.
    fn shape_volume(&self, code: i32) -> Result<f64, StructureError>;
}

/// A loaded structure seen through its public figures.
#[derive(Debug, Clone, Default)]
pub struct MetalStructure {
    structure: Structure,
}

impl MetalStructure {
    #[must_use]
    pub fn new(structure: Structure) -> Self {
        Self { structure }
    }

    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    #[must_use]
    pub fn area_and_dimensions(&self) -> String {
        self.structure.area_and_dimensions_report()
    }
}

impl StructureMetrics for MetalStructure {
    fn total_weight(&self) -> f64 {
        self.structure.total_weight()
    }

    fn total_volume(&self) -> f64 {
        self.structure.total_volume()
    }

    fn paint_cans(&self) -> PaintCans {
        self.structure.paint_can_counts()
    }

    fn shape_volume(&self, code: i32) -> Result<f64, StructureError> {
        let shape = ShapeType::from_code(code).ok_or(StructureError::InvalidShapeType { code })?;
        Ok(self.structure.total_volume_of(shape.code()))
    }
}
