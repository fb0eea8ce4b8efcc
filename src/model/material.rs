use serde::Serialize;
use std::fmt;

use super::units;

/// Every material a piece can be made of.
pub const MATERIALS: [Material; 2] = [Material::Aluminum, Material::Iron];

/// Material of a piece, with its density and paint consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    Aluminum,
    Iron,
}

impl Material {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Material::Aluminum => "Aluminum",
            Material::Iron => "Iron",
        }
    }

    /// Density in g/m³, scaled so that `density * volume / 1000` gives kilograms.
    #[must_use]
    pub const fn density(self) -> f64 {
        match self {
            Material::Aluminum => 2.7,
            Material::Iron => 7.8,
        }
    }

    /// Litres of paint needed per square metre.
    #[must_use]
    pub const fn paint_rate(self) -> f64 {
        match self {
            Material::Aluminum => 0.5,
            Material::Iron => 0.7,
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        MATERIALS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Density: {} {} - Paint consumption: {} {}",
            self.name(),
            self.density(),
            units::DENSITY,
            self.paint_rate(),
            units::PAINT_RATE
        )
    }
}
