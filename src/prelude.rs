//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and functions in the hemevo library.
//!
//! # Example
//!
//! ```
//! use hemevo::prelude::*;
//!
//! let initial = AlleleFrequencies::new(0.6, 0.4).unwrap();
//! let fitness = GenotypeFitness::from_malaria_prevalence(0.7).unwrap();
//! let trajectory = simulate(initial, fitness, 100).unwrap();
//! assert_eq!(trajectory.len(), 101);
//! ```

pub use crate::errors;
pub use crate::base::{Allele, AlleleFrequencies, FitnessValue, Genotype};
pub use crate::evolution::{GenotypeFitness, GenotypeProportions};
pub use crate::simulation::{
    simulate, simulate_from_raw, Simulation, SimulationBuilder, Trajectory,
};

// Analysis module re-exports
pub use crate::analysis::{equilibrium_frequencies, frequency_change, generations_to_converge};
