//! Hemevo: a deterministic simulator of hemoglobin allele-frequency evolution.
//!
//! This library models a two-allele hemoglobin locus (A = normal, S = sickle)
//! in an infinite, randomly mating population under heterozygote-advantage
//! selection driven by malaria prevalence. Each generation applies the
//! Hardy–Weinberg genotype expansion, weights genotypes by relative fitness,
//! and normalizes by mean fitness to produce the next generation's allele
//! frequencies.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when running simulations or analyzing results.
// Re-exporting them here makes them available as `hemevo::AlleleFrequencies`,
// `hemevo::Trajectory`, etc.
pub use base::{Allele, AlleleFrequencies, FitnessValue, Genotype};
pub use evolution::GenotypeFitness;
pub use simulation::{simulate, Simulation, Trajectory};
