use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::Allele;
use crate::errors::ConfigError;

/// Population frequencies of the two alleles at the hemoglobin locus.
///
/// Invariant: `freq_a + freq_s == 1.0`. Caller-supplied pairs are accepted
/// within [`AlleleFrequencies::SUM_TOLERANCE`] of 1.0; pairs produced by the
/// selection update conserve the sum by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlleleFrequencies {
    freq_a: f64,
    freq_s: f64,
}

impl AlleleFrequencies {
    /// Tolerance applied to the sum-to-one check on caller input.
    pub const SUM_TOLERANCE: f64 = 0.01;

    /// Create a validated frequency pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either frequency falls outside [0.0, 1.0] or the
    /// pair does not sum to 1.0 within [`Self::SUM_TOLERANCE`].
    pub fn new(freq_a: f64, freq_s: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&freq_a) || freq_a.is_nan() {
            return Err(ConfigError::FrequencyOutOfRange {
                allele: Allele::A,
                value: freq_a,
            });
        }
        if !(0.0..=1.0).contains(&freq_s) || freq_s.is_nan() {
            return Err(ConfigError::FrequencyOutOfRange {
                allele: Allele::S,
                value: freq_s,
            });
        }
        let sum = freq_a + freq_s;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(ConfigError::FrequenciesDoNotSumToOne { sum });
        }
        Ok(Self { freq_a, freq_s })
    }

    /// Construct without the sum check, for pairs that conserve the
    /// invariant by construction (the selection update).
    pub(crate) fn new_unchecked(freq_a: f64, freq_s: f64) -> Self {
        debug_assert!((freq_a + freq_s - 1.0).abs() < 1e-9);
        Self { freq_a, freq_s }
    }

    /// A population fixed for `allele` (frequency 1.0, other allele absent).
    pub fn fixed(allele: Allele) -> Self {
        match allele {
            Allele::A => Self {
                freq_a: 1.0,
                freq_s: 0.0,
            },
            Allele::S => Self {
                freq_a: 0.0,
                freq_s: 1.0,
            },
        }
    }

    /// Frequency of the normal allele A.
    pub fn freq_a(&self) -> f64 {
        self.freq_a
    }

    /// Frequency of the sickle allele S.
    pub fn freq_s(&self) -> f64 {
        self.freq_s
    }

    /// Frequency of a specific allele.
    pub fn frequency(&self, allele: Allele) -> f64 {
        match allele {
            Allele::A => self.freq_a,
            Allele::S => self.freq_s,
        }
    }

    /// Sum of both frequencies; 1.0 up to floating-point error.
    pub fn sum(&self) -> f64 {
        self.freq_a + self.freq_s
    }

    /// True if one allele has been lost from the population.
    pub fn is_fixed(&self) -> bool {
        self.freq_a == 0.0 || self.freq_s == 0.0
    }
}

impl fmt::Display for AlleleFrequencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={:.3} S={:.3}", self.freq_a, self.freq_s)
    }
}
