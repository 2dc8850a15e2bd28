//! Evolutionary operators for the hemoglobin locus.
//!
//! The model is deterministic and infinite-population, so the only operator
//! is **selection**: Hardy–Weinberg genotype expansion followed by a
//! fitness-weighted, mean-fitness-normalized allele frequency update.

pub mod selection;

pub use selection::{
    mean_fitness, next_generation, GenotypeFitness, GenotypeProportions,
    SICKLE_HOMOZYGOTE_FITNESS,
};
