//! Simulation parameters and configuration.
//!
//! All simulation state is carried in explicit, immutable configuration
//! passed into the engine on construction; nothing persists between runs
//! except what the caller threads through. The library works in allele
//! proportions throughout — any percentage-to-proportion conversion belongs
//! to the caller's input boundary.

use serde::{Deserialize, Serialize};

use crate::base::AlleleFrequencies;
use crate::errors::ConfigError;
use crate::evolution::GenotypeFitness;

/// Complete configuration for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Allele frequencies at generation 0.
    pub initial: AlleleFrequencies,
    /// Per-genotype fitness, fixed for the whole run.
    pub fitness: GenotypeFitness,
    /// Number of generations to simulate. Zero is allowed and yields a
    /// trajectory holding only the initial state.
    pub generations: usize,
}

impl SimulationConfig {
    /// Create a configuration from already-validated parts.
    pub fn new(
        initial: AlleleFrequencies,
        fitness: GenotypeFitness,
        generations: usize,
    ) -> Self {
        Self {
            initial,
            fitness,
            generations,
        }
    }

    /// Create a configuration from raw values, validating all inputs.
    ///
    /// `malaria_prevalence` is a proportion in [0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns the first violated input constraint: frequency range, the
    /// sum-to-one tolerance, or the prevalence range.
    pub fn from_raw(
        freq_a: f64,
        freq_s: f64,
        malaria_prevalence: f64,
        generations: usize,
    ) -> Result<Self, ConfigError> {
        let initial = AlleleFrequencies::new(freq_a, freq_s)?;
        let fitness = GenotypeFitness::from_malaria_prevalence(malaria_prevalence)?;
        Ok(Self {
            initial,
            fitness,
            generations,
        })
    }
}
