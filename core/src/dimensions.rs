//! # Validated Dimensions Model
//!
//! A [`Dimensions`] value only exists after the validator has accepted
//! both fields, so the area computation has no failure path.

/// Upper bound for a single side, in centimeters.
///
/// Keeps the product within a range where two-decimal rounding stays
/// meaningful (max area 1e12, far inside f64 integer precision).
pub const MAX_DIMENSION: f64 = 1_000_000.0;

/// A pair of validated rectangle sides.
///
/// Invariant: both values are finite, `> 0` and `<= MAX_DIMENSION`.
/// Constructed exclusively by [`validate`](crate::validate::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    base: f64,
    height: f64,
}

impl Dimensions {
    pub(crate) fn new(base: f64, height: f64) -> Self {
        debug_assert!(base > 0.0 && base <= MAX_DIMENSION);
        debug_assert!(height > 0.0 && height <= MAX_DIMENSION);
        Self { base, height }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Computes `base * height`, rounded at the hundredths place.
    ///
    /// Rounding rule: `f64::round` on `area * 100`, i.e. halves round
    /// away from zero.
    pub fn area(&self) -> f64 {
        (self.base * self.height * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_rounds_to_two_decimals() {
        let dims = Dimensions::new(3.333, 2.0);
        assert_eq!(dims.area(), 6.67);

        // 0.1 * 0.2 is 0.020000000000000004 before rounding; this is
        // the precision noise the hundredths rounding exists to absorb.
        let dims = Dimensions::new(0.1, 0.2);
        assert_eq!(dims.area(), 0.02);
    }

    #[test]
    fn area_exact_half_rounds_away_from_zero() {
        // 0.25 * 0.5 = 0.125 exactly in binary, so this pins the
        // tie-break rule rather than a representation artifact.
        let dims = Dimensions::new(0.25, 0.5);
        assert_eq!(dims.area(), 0.13);
    }

    #[test]
    fn area_half_reached_through_multiplication_rounds_up() {
        // f64(2.005) sits just below the literal, but multiplying by
        // 100 re-rounds onto exactly 200.5, so the half rounds up.
        let dims = Dimensions::new(2.005, 1.0);
        assert_eq!(dims.area(), 2.01);
    }

    #[test]
    fn area_at_maximum_does_not_overflow() {
        let dims = Dimensions::new(MAX_DIMENSION, MAX_DIMENSION);
        assert_eq!(dims.area(), 1_000_000_000_000.0);
    }
}
