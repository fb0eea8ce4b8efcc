use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

use super::material::Material;
use super::units;
use crate::error::StructureError;

/// Shape-type codes accepted by the filtered aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeType {
    Cylinder = 1,
    Cube = 2,
    RectangularPrism = 3,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [
        ShapeType::Cylinder,
        ShapeType::Cube,
        ShapeType::RectangularPrism,
    ];

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ShapeType::Cylinder),
            2 => Some(ShapeType::Cube),
            3 => Some(ShapeType::RectangularPrism),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShapeType::Cylinder => "Cylinder",
            ShapeType::Cube => "Cube",
            ShapeType::RectangularPrism => "RectangularPrism",
        }
    }

    /// Case-insensitive lookup by shape name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// A named dimension of a piece, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimension {
    pub name: &'static str,
    pub value: f64,
}

impl Dimension {
    #[must_use]
    pub const fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} {}", self.name, self.value, units::LENGTH)
    }
}

/// Geometry of a piece. Dimensions are stored as given; nothing checks they are positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape")]
pub enum Shape {
    Cylinder { radius: f64, height: f64 },
    Cube { edge: f64 },
    RectangularPrism { height: f64, width: f64, depth: f64 },
}

impl Shape {
    /// Builds a shape from its dimensions in [`Shape::dimensions`] order.
    /// Missing trailing values count as zero.
    #[must_use]
    pub fn from_values(shape_type: ShapeType, values: &[f64]) -> Self {
        let value = |i: usize| values.get(i).copied().unwrap_or(0.0);
        match shape_type {
            ShapeType::Cylinder => Shape::Cylinder {
                radius: value(0),
                height: value(1),
            },
            ShapeType::Cube => Shape::Cube { edge: value(0) },
            ShapeType::RectangularPrism => Shape::RectangularPrism {
                height: value(0),
                width: value(1),
                depth: value(2),
            },
        }
    }

    #[must_use]
    pub const fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Cylinder { .. } => ShapeType::Cylinder,
            Shape::Cube { .. } => ShapeType::Cube,
            Shape::RectangularPrism { .. } => ShapeType::RectangularPrism,
        }
    }

    /// Surface area of one unit, in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Cylinder { radius, height } => 2.0 * PI * radius * (radius + height),
            Shape::Cube { edge } => 6.0 * (edge * edge),
            Shape::RectangularPrism {
                height,
                width,
                depth,
            } => 2.0 * (height * width + height * depth + width * depth),
        }
    }

    /// Volume of one unit, in m³.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match *self {
            Shape::Cylinder { radius, height } => PI * radius * radius * height,
            Shape::Cube { edge } => edge * edge * edge,
            Shape::RectangularPrism {
                height,
                width,
                depth,
            } => height * width * depth,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Vec<Dimension> {
        match *self {
            Shape::Cylinder { radius, height } => vec![
                Dimension::new("Radius", radius),
                Dimension::new("Height", height),
            ],
            Shape::Cube { edge } => vec![Dimension::new("Edge", edge)],
            Shape::RectangularPrism {
                height,
                width,
                depth,
            } => vec![
                Dimension::new("Height", height),
                Dimension::new("Width", width),
                Dimension::new("Depth", depth),
            ],
        }
    }
}

/// One entry of a structure: `quantity` identical units of a shape in a material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Piece {
    pub name: String,
    pub quantity: u32,
    pub material: Material,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Piece {
    /// Creates a piece named after its shape.
    #[must_use]
    pub fn new(quantity: u32, material: Material, shape: Shape) -> Self {
        Self {
            name: shape.shape_type().name().to_string(),
            quantity,
            material,
            shape,
        }
    }

    #[must_use]
    pub fn cylinder(quantity: u32, material: Material, radius: f64, height: f64) -> Self {
        Self::new(quantity, material, Shape::Cylinder { radius, height })
    }

    #[must_use]
    pub fn cube(quantity: u32, material: Material, edge: f64) -> Self {
        Self::new(quantity, material, Shape::Cube { edge })
    }

    #[must_use]
    pub fn rectangular_prism(
        quantity: u32,
        material: Material,
        height: f64,
        width: f64,
        depth: f64,
    ) -> Self {
        Self::new(
            quantity,
            material,
            Shape::RectangularPrism {
                height,
                width,
                depth,
            },
        )
    }

    /// Builds a piece from loader-supplied names.
    ///
    /// `values` holds the dimensions in the order [`Shape::dimensions`]
    /// reports them; missing trailing values count as zero.
    pub fn from_names(
        shape_name: &str,
        quantity: u32,
        material_name: &str,
        values: &[f64],
    ) -> Result<Self, StructureError> {
        let shape_type =
            ShapeType::from_name(shape_name).ok_or_else(|| StructureError::InvalidShapeName {
                name: shape_name.to_string(),
            })?;
        let material =
            Material::from_name(material_name).ok_or_else(|| StructureError::InvalidMaterial {
                name: material_name.to_string(),
            })?;

        Ok(Self::new(
            quantity,
            material,
            Shape::from_values(shape_type, values),
        ))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    #[must_use]
    pub const fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.shape.area()
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.shape.volume()
    }

    #[must_use]
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.shape.dimensions()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {} unit(s).", self.name, self.quantity)?;
        writeln!(f, "\tMaterial: {}", self.material)?;
        for dimension in self.dimensions() {
            writeln!(f, "\t{dimension}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cube_formulas() {
        let cube = Piece::cube(1, Material::Iron, 2.0);
        assert!(close(cube.area(), 24.0));
        assert!(close(cube.volume(), 8.0));
    }

    #[test]
    fn cylinder_formulas() {
        let cylinder = Piece::cylinder(1, Material::Aluminum, 1.0, 2.0);
        assert!(close(cylinder.area(), 6.0 * PI));
        assert!(close(cylinder.volume(), 2.0 * PI));
        assert_eq!(format!("{:.2}", cylinder.area()), "18.85");
        assert_eq!(format!("{:.2}", cylinder.volume()), "6.28");
    }

    #[test]
    fn rectangular_prism_formulas() {
        let prism = Piece::rectangular_prism(1, Material::Iron, 1.0, 2.0, 3.0);
        assert!(close(prism.area(), 22.0));
        assert!(close(prism.volume(), 6.0));
    }

    #[test]
    fn degenerate_dimensions_are_not_rejected() {
        let cube = Piece::cube(1, Material::Iron, -1.0);
        assert!(close(cube.volume(), -1.0));
        assert!(close(Piece::cube(1, Material::Iron, 0.0).area(), 0.0));
    }

    #[test]
    fn dimensions_come_back_in_fixed_order() {
        let prism = Piece::rectangular_prism(3, Material::Aluminum, 1.5, 2.25, 0.75);
        assert_eq!(
            prism.dimensions(),
            vec![
                Dimension::new("Height", 1.5),
                Dimension::new("Width", 2.25),
                Dimension::new("Depth", 0.75),
            ]
        );

        let cylinder = Piece::cylinder(1, Material::Iron, 0.3, 4.0);
        assert_eq!(
            cylinder.dimensions(),
            vec![Dimension::new("Radius", 0.3), Dimension::new("Height", 4.0)]
        );

        let cube = Piece::cube(1, Material::Iron, 0.1);
        assert_eq!(cube.dimensions(), vec![Dimension::new("Edge", 0.1)]);
    }

    #[test]
    fn from_names_matches_case_insensitively() {
        let piece = Piece::from_names("cYLINDER", 4, "aluminum", &[0.5, 3.0]).unwrap();
        assert_eq!(piece, Piece::cylinder(4, Material::Aluminum, 0.5, 3.0));
        assert_eq!(piece.name, "Cylinder");
    }

    #[test]
    fn from_names_rejects_unknown_names() {
        assert_eq!(
            Piece::from_names("Sphere", 1, "Iron", &[1.0]),
            Err(StructureError::InvalidShapeName {
                name: "Sphere".to_string()
            })
        );
        assert_eq!(
            Piece::from_names("Cube", 1, "Copper", &[1.0]),
            Err(StructureError::InvalidMaterial {
                name: "Copper".to_string()
            })
        );
    }

    #[test]
    fn from_values_pads_missing_dimensions() {
        assert_eq!(
            Shape::from_values(ShapeType::RectangularPrism, &[1.0, 2.0]),
            Shape::RectangularPrism {
                height: 1.0,
                width: 2.0,
                depth: 0.0
            }
        );
    }

    #[test]
    fn builders_replace_fields() {
        let piece = Piece::cube(1, Material::Iron, 1.0)
            .with_name("cubo")
            .with_quantity(7)
            .with_material(Material::Aluminum);
        assert_eq!(piece.name, "cubo");
        assert_eq!(piece.quantity, 7);
        assert_eq!(piece.material, Material::Aluminum);
    }

    #[test]
    fn shape_codes_round_trip() {
        for shape in ShapeType::ALL {
            assert_eq!(ShapeType::from_code(shape.code()), Some(shape));
        }
        assert_eq!(ShapeType::from_code(0), None);
        assert_eq!(ShapeType::from_code(4), None);
    }

    #[test]
    fn dimension_display_uses_two_decimals() {
        assert_eq!(Dimension::new("Edge", 2.0).to_string(), "Edge: 2.00 m");
    }
}
