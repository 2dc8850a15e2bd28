//! Temporal analysis
//!
//! Functions for tracking how allele frequencies change across a recorded
//! trajectory.

use crate::simulation::Trajectory;

/// Per-generation change in the S allele frequency.
///
/// Entry `i` is `freq_s(i + 1) - freq_s(i)`; length is
/// `trajectory.generations()`.
pub fn frequency_change(trajectory: &Trajectory) -> Vec<f64> {
    trajectory
        .entries()
        .windows(2)
        .map(|pair| pair[1].freq_s() - pair[0].freq_s())
        .collect()
}

/// First generation at which the per-generation S frequency change drops
/// below `tolerance` in magnitude, if the trajectory got that far.
///
/// Returns the 1-based generation index of the first sufficiently small
/// step, or `None` if every recorded step exceeds the tolerance.
pub fn generations_to_converge(trajectory: &Trajectory, tolerance: f64) -> Option<usize> {
    frequency_change(trajectory)
        .iter()
        .position(|delta| delta.abs() < tolerance)
        .map(|idx| idx + 1)
}
