use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A relative fitness value constrained to the range [0.0, 1.0].
///
/// Fitness is measured relative to the fittest genotype, so 1.0 is full
/// fitness and 0.0 is lethal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct FitnessValue(f64);

impl FitnessValue {
    /// Full relative fitness.
    pub const NEUTRAL: FitnessValue = FitnessValue(1.0);

    /// Zero fitness; carriers leave no offspring.
    pub const LETHAL: FitnessValue = FitnessValue(0.0);

    /// Creates a new FitnessValue, clamping the input to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the inner f64 value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns true if this fitness is exactly zero.
    pub fn is_lethal(self) -> bool {
        self.0 == 0.0
    }
}

impl Deref for FitnessValue {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl From<FitnessValue> for f64 {
    fn from(fitness: FitnessValue) -> Self {
        fitness.0
    }
}

impl From<f64> for FitnessValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for FitnessValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for FitnessValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper for comparing f64 values with absolute tolerance.
    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_new_clamps_negative_to_zero() {
        let f = FitnessValue::new(-1.0);
        assert!(approx_eq(f.get(), 0.0, 1e-12));
    }

    #[test]
    fn test_new_preserves_midrange() {
        let f = FitnessValue::new(0.5);
        assert!(approx_eq(f.get(), 0.5, 1e-12));
    }

    #[test]
    fn test_new_clamps_above_one_to_one() {
        let f = FitnessValue::new(2.0);
        assert!(approx_eq(f.get(), 1.0, 1e-12));
    }

    #[test]
    fn test_from_f64_clamps_and_preserves_values() {
        let f_from_neg: FitnessValue = (-1.0).into();
        assert!(approx_eq(f_from_neg.get(), 0.0, 1e-12));

        let f_from_pos: FitnessValue = 0.75.into();
        assert!(approx_eq(f_from_pos.get(), 0.75, 1e-12));

        let f_from_big: FitnessValue = 10.0.into();
        assert!(approx_eq(f_from_big.get(), 1.0, 1e-12));
    }

    #[test]
    fn test_constants() {
        assert!(approx_eq(FitnessValue::NEUTRAL.get(), 1.0, 1e-12));
        assert!(approx_eq(FitnessValue::LETHAL.get(), 0.0, 1e-12));
        assert!(FitnessValue::LETHAL.is_lethal());
        assert!(!FitnessValue::NEUTRAL.is_lethal());
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(FitnessValue::default(), FitnessValue::NEUTRAL);
    }

    #[test]
    fn test_deref_reads_inner_value() {
        let f = FitnessValue::new(0.3);
        assert!(*f > 0.2 && *f < 0.4);
    }

    #[test]
    fn test_display_parsable() {
        let f = FitnessValue::new(0.25);
        let parsed: f64 = f.to_string().parse().expect("display should parse as f64");
        assert!(approx_eq(parsed, 0.25, 1e-12));
    }
}
