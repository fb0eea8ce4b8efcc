//! Unit labels used when rendering quantities.

/// Length of every piece dimension.
pub const LENGTH: &str = "m";
/// Surface area of a piece.
pub const AREA: &str = "m²";
/// Volume of a piece or of the whole structure.
pub const VOLUME: &str = "m³";
/// Total weight of the structure.
pub const WEIGHT: &str = "Kg";
/// Material density.
pub const DENSITY: &str = "g/m³";
/// Paint consumption per unit of area.
pub const PAINT_RATE: &str = "l/m²";
/// Paint volume.
pub const PAINT: &str = "l";
