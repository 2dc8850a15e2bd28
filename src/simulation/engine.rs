//! Simulation engine for allele-frequency evolution.
//!
//! This module provides the generation loop that applies selection to the
//! current allele frequencies and records the resulting trajectory. The
//! computation is a pure, single-threaded iteration with no I/O and no
//! shared state; independent runs may execute concurrently without
//! coordination.

use crate::base::AlleleFrequencies;
use crate::errors::{SelectionError, SimulationError};
use crate::evolution::{next_generation, GenotypeFitness};
use crate::simulation::{SimulationConfig, Trajectory};

/// Main simulation engine.
///
/// Owns the fitness table and the trajectory built so far. The current
/// frequencies are always the trajectory's last entry.
#[derive(Debug, Clone)]
pub struct Simulation {
    fitness: GenotypeFitness,
    trajectory: Trajectory,
    total_generations: usize,
}

impl Simulation {
    /// Create a new simulation from configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            fitness: config.fitness,
            trajectory: Trajectory::with_capacity(config.initial, config.generations),
            total_generations: config.generations,
        }
    }

    /// Get the current allele frequencies.
    pub fn frequencies(&self) -> AlleleFrequencies {
        self.trajectory.last()
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.trajectory.generations()
    }

    /// Get the configured number of generations for [`run`](Self::run).
    pub fn total_generations(&self) -> usize {
        self.total_generations
    }

    /// Get reference to the fitness table.
    pub fn fitness(&self) -> &GenotypeFitness {
        &self.fitness
    }

    /// Get the trajectory recorded so far.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Consume the engine and return the trajectory.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Advance the simulation by one generation.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectionError::DegenerateFitness`] when the current
    /// population's mean fitness is zero; the trajectory is left unchanged
    /// and further stepping would fail identically.
    pub fn step(&mut self) -> Result<(), SelectionError> {
        let current = self.trajectory.last();
        let next = next_generation(&current, &self.fitness).ok_or(
            SelectionError::DegenerateFitness {
                generation: self.generation(),
            },
        )?;
        self.trajectory.push(next);
        Ok(())
    }

    /// Run the simulation up to the configured number of generations.
    pub fn run(&mut self) -> Result<(), SelectionError> {
        while self.generation() < self.total_generations {
            self.step()?;
        }
        Ok(())
    }

    /// Run the simulation for a specific number of further generations.
    pub fn run_for(&mut self, generations: usize) -> Result<(), SelectionError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}

/// Run a complete simulation and return its trajectory.
///
/// This is the pure-function entry point: generation 0 is `initial`, each of
/// the `generations` steps feeds on the previous step's output, and the
/// returned trajectory has exactly `generations + 1` entries. Feeding the
/// final frequencies of one run into a fresh run continues the same
/// sequence, so simulating N then M generations equals simulating N + M.
///
/// # Errors
///
/// Fails with [`SelectionError::DegenerateFitness`] if mean fitness reaches
/// zero at any generation (only possible when every genotype present is
/// lethal, e.g. allele A fixed under 100% malaria prevalence).
pub fn simulate(
    initial: AlleleFrequencies,
    fitness: GenotypeFitness,
    generations: usize,
) -> Result<Trajectory, SelectionError> {
    let mut sim = Simulation::new(SimulationConfig::new(initial, fitness, generations));
    sim.run()?;
    Ok(sim.into_trajectory())
}

/// Validate raw inputs and run a complete simulation.
///
/// `malaria_prevalence` is a proportion in [0.0, 1.0]; callers holding a
/// percentage convert at their own boundary.
///
/// # Errors
///
/// Rejects invalid inputs before any simulation work (frequencies outside
/// [0.0, 1.0], the pair off the sum-to-one tolerance, or prevalence outside
/// [0.0, 1.0]), and otherwise fails only on degenerate mean fitness.
pub fn simulate_from_raw(
    freq_a: f64,
    freq_s: f64,
    malaria_prevalence: f64,
    generations: usize,
) -> Result<Trajectory, SimulationError> {
    let config = SimulationConfig::from_raw(freq_a, freq_s, malaria_prevalence, generations)?;
    Ok(simulate(config.initial, config.fitness, config.generations)?)
}
