use serde::Serialize;

/// Largest paint can, in litres.
pub const CAN_5L: f64 = 5.0;
/// Medium paint can, in litres.
pub const CAN_2L: f64 = 2.0;
/// Smallest paint can, in litres.
pub const CAN_05L: f64 = 0.5;

/// Number of cans of each size needed to paint a structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaintCans {
    pub half_litre: u32,
    pub two_litre: u32,
    pub five_litre: u32,
}

impl PaintCans {
    /// Counts in positional order: 0.5 L, 2 L, 5 L.
    #[must_use]
    pub const fn as_array(&self) -> [u32; 3] {
        [self.half_litre, self.two_litre, self.five_litre]
    }

    /// Paint volume the cans hold together.
    #[must_use]
    pub fn litres(&self) -> f64 {
        f64::from(self.half_litre) * CAN_05L
            + f64::from(self.two_litre) * CAN_2L
            + f64::from(self.five_litre) * CAN_5L
    }

    /// Number of cans of all sizes.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.half_litre + self.two_litre + self.five_litre
    }
}

/// Splits a paint requirement into cans, largest size first.
///
/// 5 L and 2 L cans are only used while they fit entirely; whatever is left is
/// covered by 0.5 L cans rounded up, so the result never holds less paint than
/// requested. A requirement that is zero, negative or not finite needs no cans.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn allocate(litres: f64) -> PaintCans {
    if !litres.is_finite() || litres <= 0.0 {
        return PaintCans::default();
    }

    let mut remaining = litres;

    let five_litre = (remaining / CAN_5L).floor();
    remaining -= five_litre * CAN_5L;

    let two_litre = (remaining / CAN_2L).floor();
    remaining -= two_litre * CAN_2L;

    let half_litre = (remaining / CAN_05L).ceil().max(0.0);

    PaintCans {
        half_litre: half_litre as u32,
        two_litre: two_litre as u32,
        five_litre: five_litre as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_five_litres_uses_one_large_can() {
        assert_eq!(allocate(5.0).as_array(), [0, 0, 1]);
    }

    #[test]
    fn leftover_is_rounded_up_in_small_cans() {
        assert_eq!(allocate(11.3).as_array(), [3, 0, 2]);
        assert_eq!(allocate(11.0).as_array(), [2, 0, 2]);
        assert_eq!(allocate(0.1).as_array(), [1, 0, 0]);
    }

    #[test]
    fn medium_cans_fill_between_large_ones() {
        assert_eq!(allocate(9.0).as_array(), [0, 2, 1]);
        assert_eq!(allocate(7.5).as_array(), [1, 1, 1]);
        assert_eq!(allocate(3.99).as_array(), [4, 1, 0]);
    }

    #[test]
    fn total_counts_every_size() {
        let cans = allocate(11.3);
        assert_eq!(cans.total(), 5);
        assert_eq!(PaintCans::default().total(), 0);
    }

    #[test]
    fn nothing_to_paint_needs_no_cans() {
        assert_eq!(allocate(0.0), PaintCans::default());
        assert_eq!(allocate(-3.0), PaintCans::default());
        assert_eq!(allocate(f64::NAN), PaintCans::default());
    }

    #[test]
    fn cans_always_cover_the_requirement() {
        for hundredths in 1..2_000 {
            let litres = f64::from(hundredths) / 100.0;
            let cans = allocate(litres);
            assert!(
                cans.litres() + 1e-9 >= litres,
                "{litres} L not covered by {cans:?}"
            );
            assert!(cans.half_litre <= 4, "{litres} L gave {cans:?}");
        }
    }
}
