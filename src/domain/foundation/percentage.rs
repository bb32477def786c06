//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive, kept at full precision.
///
/// Display rounding is a presentation concern; use [`Percentage::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Percentage, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a fraction in [0, 1].
    pub fn from_fraction(fraction: f64) -> Result<Self, ValidationError> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::out_of_range("fraction", 0.0, 1.0, fraction));
        }
        Ok(Self(fraction * 100.0))
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> f64 {
        round_to(self.0, decimals)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}%", p, round_to(self.0, p as u32)),
            None => write!(f, "{:.2}%", round_to(self.0, 2)),
        }
    }
}

/// Rounds `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_try_new_accepts_valid_values() {
        assert!(Percentage::try_new(0.0).is_ok());
        assert!(Percentage::try_new(50.5).is_ok());
        assert!(Percentage::try_new(100.0).is_ok());
    }

    #[test]
    fn percentage_try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(-0.1).is_err());
        assert!(Percentage::try_new(100.1).is_err());
        assert!(Percentage::try_new(f64::NAN).is_err());
    }

    #[test]
    fn percentage_from_fraction_scales_by_100() {
        let pct = Percentage::from_fraction(0.62).unwrap();
        assert!((pct.value() - 62.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_from_fraction_rejects_out_of_range() {
        match Percentage::from_fraction(1.2) {
            Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "fraction"),
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn percentage_rounds_for_display() {
        let pct = Percentage::from_fraction(0.73456).unwrap();
        assert_eq!(pct.rounded(2), 73.46);
        assert_eq!(pct.rounded(1), 73.5);
    }

    #[test]
    fn percentage_displays_with_requested_precision() {
        let pct = Percentage::from_fraction(0.62).unwrap();
        assert_eq!(format!("{}", pct), "62.00%");
        assert_eq!(format!("{:.1}", pct), "62.0%");
    }

    #[test]
    fn round_to_handles_bmi_precision() {
        assert_eq!(round_to(70.0 / (1.75 * 1.75), 2), 22.86);
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::try_new(42.5).unwrap()).unwrap();
        assert_eq!(json, "42.5");
    }
}
