//! Base types for the hemoglobin locus model.
//!
//! This module provides the foundational types: alleles, genotypes, relative
//! fitness values, and allele-frequency pairs.

pub mod allele;
pub mod fitness;
pub mod frequency;

pub use allele::{Allele, Genotype};
pub use fitness::FitnessValue;
pub use frequency::AlleleFrequencies;
