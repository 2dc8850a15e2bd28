//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! validation deferred to `build()`.

use crate::base::AlleleFrequencies;
pub use crate::errors::BuilderError;
use crate::evolution::GenotypeFitness;
use crate::simulation::{Simulation, SimulationConfig};

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use hemevo::simulation::SimulationBuilder;
///
/// // Sickle-cell fitness derived from malaria prevalence (proportion).
/// let sim = SimulationBuilder::new()
///     .initial_frequencies(0.6, 0.4)
///     .malaria_prevalence(0.7)
///     .generations(100)
///     .build()
///     .unwrap();
///
/// // Explicit per-genotype fitness.
/// use hemevo::evolution::GenotypeFitness;
/// let sim = SimulationBuilder::new()
///     .initial_frequencies(0.5, 0.5)
///     .genotype_fitness(GenotypeFitness::new(0.9, 1.0, 0.4))
///     .generations(50)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    freq_a: Option<f64>,
    freq_s: Option<f64>,
    generations: Option<usize>,

    // Fitness: explicit table wins over prevalence
    malaria_prevalence: Option<f64>,
    fitness: Option<GenotypeFitness>,
}

impl SimulationBuilder {
    /// Create a new simulation builder with no parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial allele frequencies (required). Proportions in
    /// [0.0, 1.0] that sum to 1.0 within the input tolerance.
    pub fn initial_frequencies(mut self, freq_a: f64, freq_s: f64) -> Self {
        self.freq_a = Some(freq_a);
        self.freq_s = Some(freq_s);
        self
    }

    /// Set the number of generations to simulate (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Derive genotype fitness from malaria prevalence, a proportion in
    /// [0.0, 1.0]. One of this or [`genotype_fitness`](Self::genotype_fitness)
    /// is required.
    pub fn malaria_prevalence(mut self, prevalence: f64) -> Self {
        self.malaria_prevalence = Some(prevalence);
        self
    }

    /// Set an explicit per-genotype fitness table, overriding any
    /// prevalence-derived one.
    pub fn genotype_fitness(mut self, fitness: GenotypeFitness) -> Self {
        self.fitness = Some(fitness);
        self
    }

    /// Validate all parameters and build the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingRequired`] if a required parameter was
    /// never set, or the wrapped input-validation error for out-of-range
    /// values.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let freq_a = self.freq_a.ok_or(BuilderError::MissingRequired(
            "initial_frequencies",
        ))?;
        let freq_s = self.freq_s.ok_or(BuilderError::MissingRequired(
            "initial_frequencies",
        ))?;
        let generations = self
            .generations
            .ok_or(BuilderError::MissingRequired("generations"))?;

        let initial = AlleleFrequencies::new(freq_a, freq_s)?;
        let fitness = match (self.fitness, self.malaria_prevalence) {
            (Some(fitness), _) => fitness,
            (None, Some(prevalence)) => GenotypeFitness::from_malaria_prevalence(prevalence)?,
            (None, None) => {
                return Err(BuilderError::MissingRequired(
                    "malaria_prevalence or genotype_fitness",
                ))
            }
        };

        Ok(Simulation::new(SimulationConfig::new(
            initial,
            fitness,
            generations,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_builder_with_prevalence() {
        let sim = SimulationBuilder::new()
            .initial_frequencies(0.6, 0.4)
            .malaria_prevalence(0.7)
            .generations(10)
            .build()
            .unwrap();

        assert_eq!(sim.generation(), 0);
        assert!((*sim.fitness().homozygous_a - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_builder_with_explicit_fitness() {
        let sim = SimulationBuilder::new()
            .initial_frequencies(0.5, 0.5)
            .genotype_fitness(GenotypeFitness::new(0.9, 1.0, 0.4))
            .generations(10)
            .build()
            .unwrap();

        assert!((*sim.fitness().homozygous_s - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_builder_explicit_fitness_wins_over_prevalence() {
        let sim = SimulationBuilder::new()
            .initial_frequencies(0.5, 0.5)
            .malaria_prevalence(0.7)
            .genotype_fitness(GenotypeFitness::neutral())
            .generations(10)
            .build()
            .unwrap();

        assert!(sim.fitness().is_neutral());
    }

    #[test]
    fn test_builder_missing_frequencies() {
        let err = SimulationBuilder::new()
            .malaria_prevalence(0.7)
            .generations(10)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuilderError::MissingRequired("initial_frequencies")
        ));
    }

    #[test]
    fn test_builder_missing_generations() {
        let err = SimulationBuilder::new()
            .initial_frequencies(0.6, 0.4)
            .malaria_prevalence(0.7)
            .build()
            .unwrap_err();

        assert!(matches!(err, BuilderError::MissingRequired("generations")));
    }

    #[test]
    fn test_builder_missing_fitness() {
        let err = SimulationBuilder::new()
            .initial_frequencies(0.6, 0.4)
            .generations(10)
            .build()
            .unwrap_err();

        assert!(matches!(err, BuilderError::MissingRequired(_)));
    }

    #[test]
    fn test_builder_invalid_frequencies() {
        let err = SimulationBuilder::new()
            .initial_frequencies(0.6, 0.6)
            .malaria_prevalence(0.7)
            .generations(10)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuilderError::InvalidConfig(ConfigError::FrequenciesDoNotSumToOne { .. })
        ));
    }

    #[test]
    fn test_builder_invalid_prevalence() {
        // Percent where a proportion belongs.
        let err = SimulationBuilder::new()
            .initial_frequencies(0.6, 0.4)
            .malaria_prevalence(70.0)
            .generations(10)
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuilderError::InvalidConfig(ConfigError::PrevalenceOutOfRange(_))
        ));
    }
}
