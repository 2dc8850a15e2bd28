//! Selection under heterozygote advantage at the hemoglobin locus.
//!
//! This module provides the fitness model and the one-generation allele
//! frequency update that drive the simulation. Fitness determines
//! reproductive success: each allele's next-generation frequency is the
//! fitness-weighted contribution of the genotypes carrying it, normalized by
//! population mean fitness.
//!
//! ## Fitness model
//!
//! Genotype fitness is relative to the heterozygote:
//! - **AA**: susceptible to malaria; fitness falls with malaria prevalence
//!   (`1 - prevalence`)
//! - **AS**: full fitness — carries normal hemoglobin and partial malaria
//!   resistance (heterozygote advantage)
//! - **SS**: sickle-cell disease burden; fixed low fitness
//!
//! With both homozygotes less fit than the heterozygote, selection maintains
//! both alleles at a stable interior equilibrium instead of fixing one.

use serde::{Deserialize, Serialize};

use crate::base::{AlleleFrequencies, FitnessValue, Genotype};
use crate::errors::ConfigError;

/// Relative fitness of the sickle homozygote (SS), reflecting sickle-cell
/// disease burden. Constant across malaria prevalence.
pub const SICKLE_HOMOZYGOTE_FITNESS: f64 = 0.2;

/// Relative fitness assigned to each genotype at the locus.
///
/// Derived once per run and immutable thereafter; fitness does not itself
/// evolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenotypeFitness {
    /// Fitness of the AA homozygote.
    pub homozygous_a: FitnessValue,
    /// Fitness of the AS heterozygote.
    pub heterozygous: FitnessValue,
    /// Fitness of the SS homozygote.
    pub homozygous_s: FitnessValue,
}

impl GenotypeFitness {
    /// Create a fitness table from explicit per-genotype values.
    ///
    /// Values are clamped to [0.0, 1.0].
    pub fn new(
        homozygous_a: impl Into<FitnessValue>,
        heterozygous: impl Into<FitnessValue>,
        homozygous_s: impl Into<FitnessValue>,
    ) -> Self {
        Self {
            homozygous_a: homozygous_a.into(),
            heterozygous: heterozygous.into(),
            homozygous_s: homozygous_s.into(),
        }
    }

    /// Derive the sickle-cell fitness table from malaria prevalence.
    ///
    /// `prevalence` is a proportion in [0.0, 1.0], not a percentage:
    /// `w_AA = 1 - prevalence`, `w_AS = 1.0`,
    /// `w_SS = ` [`SICKLE_HOMOZYGOTE_FITNESS`].
    ///
    /// # Errors
    ///
    /// Returns an error if `prevalence` is outside [0.0, 1.0].
    pub fn from_malaria_prevalence(prevalence: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&prevalence) || prevalence.is_nan() {
            return Err(ConfigError::PrevalenceOutOfRange(prevalence));
        }
        Ok(Self {
            homozygous_a: FitnessValue::new(1.0 - prevalence),
            heterozygous: FitnessValue::NEUTRAL,
            homozygous_s: FitnessValue::new(SICKLE_HOMOZYGOTE_FITNESS),
        })
    }

    /// Fitness table with no selection (all genotypes at full fitness).
    pub fn neutral() -> Self {
        Self {
            homozygous_a: FitnessValue::NEUTRAL,
            heterozygous: FitnessValue::NEUTRAL,
            homozygous_s: FitnessValue::NEUTRAL,
        }
    }

    /// Fitness of a specific genotype.
    pub fn fitness(&self, genotype: Genotype) -> FitnessValue {
        match genotype {
            Genotype::AA => self.homozygous_a,
            Genotype::AS => self.heterozygous,
            Genotype::SS => self.homozygous_s,
        }
    }

    /// True if all genotypes share the same fitness (no selection).
    pub fn is_neutral(&self) -> bool {
        self.homozygous_a == self.heterozygous && self.heterozygous == self.homozygous_s
    }

    /// True if the heterozygote is strictly fitter than both homozygotes,
    /// the regime that maintains a stable interior equilibrium.
    pub fn has_heterozygote_advantage(&self) -> bool {
        *self.heterozygous > *self.homozygous_a && *self.heterozygous > *self.homozygous_s
    }
}

/// Expected genotype proportions in a randomly mating population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenotypeProportions {
    aa: f64,
    a_s: f64,
    ss: f64,
}

impl GenotypeProportions {
    /// Hardy–Weinberg expansion of the current allele frequencies:
    /// `p²`, `2pq`, `q²`.
    pub fn from_frequencies(frequencies: &AlleleFrequencies) -> Self {
        let p = frequencies.freq_a();
        let q = frequencies.freq_s();
        Self {
            aa: p * p,
            a_s: 2.0 * p * q,
            ss: q * q,
        }
    }

    /// Proportion of a specific genotype.
    pub fn proportion(&self, genotype: Genotype) -> f64 {
        match genotype {
            Genotype::AA => self.aa,
            Genotype::AS => self.a_s,
            Genotype::SS => self.ss,
        }
    }

    /// Sum of all three proportions; 1.0 up to floating-point error.
    pub fn sum(&self) -> f64 {
        self.aa + self.a_s + self.ss
    }
}

/// Population mean fitness: genotype proportions weighted by genotype
/// fitness.
pub fn mean_fitness(proportions: &GenotypeProportions, fitness: &GenotypeFitness) -> f64 {
    Genotype::ALL
        .iter()
        .map(|&g| proportions.proportion(g) * fitness.fitness(g).get())
        .sum()
}

/// Apply one generation of selection to the current allele frequencies.
///
/// Each allele's new frequency is the fitness-weighted contribution of the
/// genotypes carrying it (homozygote fully, heterozygote half), normalized
/// by mean fitness. The update conserves `freq_a + freq_s == 1.0` by
/// construction.
///
/// Returns `None` when mean fitness is zero, which leaves the normalized
/// update undefined; the caller decides how to surface that (see
/// `SelectionError::DegenerateFitness`).
pub fn next_generation(
    current: &AlleleFrequencies,
    fitness: &GenotypeFitness,
) -> Option<AlleleFrequencies> {
    let proportions = GenotypeProportions::from_frequencies(current);
    let w_bar = mean_fitness(&proportions, fitness);
    if w_bar == 0.0 {
        return None;
    }

    let aa_term = proportions.proportion(Genotype::AA) * fitness.fitness(Genotype::AA).get();
    let as_term = proportions.proportion(Genotype::AS) * fitness.fitness(Genotype::AS).get();
    let ss_term = proportions.proportion(Genotype::SS) * fitness.fitness(Genotype::SS).get();

    let freq_a = (aa_term + 0.5 * as_term) / w_bar;
    let freq_s = (ss_term + 0.5 * as_term) / w_bar;

    Some(AlleleFrequencies::new_unchecked(freq_a, freq_s))
}
