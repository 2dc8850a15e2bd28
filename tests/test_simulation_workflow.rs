//! Integration tests for end-to-end simulation workflows.
//! Tests that simulate real-world usage patterns combining multiple modules.

use hemevo::{
    analysis::{equilibrium_frequencies, frequency_change, generations_to_converge},
    base::{Allele, AlleleFrequencies},
    errors::SelectionError,
    evolution::GenotypeFitness,
    simulation::{simulate, SimulationBuilder},
};

/// Helper for comparing f64 values with absolute tolerance.
fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn test_basic_simulation_workflow() {
    // Create a simple simulation and run it
    let mut sim = SimulationBuilder::new()
        .initial_frequencies(0.6, 0.4)
        .malaria_prevalence(0.7)
        .generations(100)
        .build()
        .unwrap();

    sim.run().unwrap();

    let trajectory = sim.into_trajectory();
    assert_eq!(trajectory.len(), 101);
    assert_eq!(trajectory.initial().freq_a(), 0.6);
}

#[test]
fn test_trajectory_conserves_allele_frequencies() {
    // Every entry of every run sums to 1.0 within floating-point tolerance.
    for prevalence in [0.0, 0.3, 0.7, 1.0] {
        let initial = AlleleFrequencies::new(0.8, 0.2).unwrap();
        let fitness = GenotypeFitness::from_malaria_prevalence(prevalence).unwrap();
        let trajectory = simulate(initial, fitness, 300).unwrap();

        for (generation, freqs) in trajectory.iter().enumerate() {
            assert!(
                approx_eq(freqs.sum(), 1.0, 1e-9),
                "sum {} at generation {generation} under prevalence {prevalence}",
                freqs.sum()
            );
        }
    }
}

#[test]
fn test_reference_scenario_single_generation() {
    // initial A/S = 0.6/0.4 at 70% prevalence: genotypes 0.36/0.48/0.16,
    // mean fitness 0.62, next frequencies ~0.5613/0.4387.
    let initial = AlleleFrequencies::new(0.6, 0.4).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(0.7).unwrap();

    let trajectory = simulate(initial, fitness, 1).unwrap();

    assert_eq!(trajectory.len(), 2);
    assert!(approx_eq(trajectory[0].freq_a(), 0.6, 1e-12));
    assert!(approx_eq(trajectory[0].freq_s(), 0.4, 1e-12));
    assert!(approx_eq(trajectory[1].freq_a(), 0.561, 5e-4));
    assert!(approx_eq(trajectory[1].freq_s(), 0.439, 5e-4));
}

#[test]
fn test_sickle_allele_rises_under_full_prevalence() {
    // With AA lethal (100% prevalence) and S initially rare, S rises
    // without ever decreasing, toward the 1/1.8 equilibrium.
    let initial = AlleleFrequencies::new(0.9, 0.1).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(1.0).unwrap();
    let trajectory = simulate(initial, fitness, 200).unwrap();

    for delta in frequency_change(&trajectory) {
        assert!(delta >= -1e-12, "S frequency decreased by {delta}");
    }

    let equilibrium = equilibrium_frequencies(&fitness).unwrap();
    assert!(approx_eq(equilibrium.freq_s(), 1.0 / 1.8, 1e-12));
    assert!(approx_eq(trajectory.last().freq_s(), equilibrium.freq_s(), 1e-6));
}

#[test]
fn test_no_selection_identity() {
    // Equal fitness for all genotypes leaves frequencies untouched at every
    // generation, whatever the shared fitness value.
    let initial = AlleleFrequencies::new(0.35, 0.65).unwrap();
    for shared in [1.0, 0.5] {
        let fitness = GenotypeFitness::new(shared, shared, shared);
        let trajectory = simulate(initial, fitness, 50).unwrap();

        for freqs in &trajectory {
            assert!(approx_eq(freqs.freq_a(), 0.35, 1e-12));
            assert!(approx_eq(freqs.freq_s(), 0.65, 1e-12));
        }
    }
}

#[test]
fn test_split_run_composition() {
    // Simulating N generations then M more from the final state matches a
    // single N + M run exactly.
    let initial = AlleleFrequencies::new(0.6, 0.4).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(0.55).unwrap();

    let first = simulate(initial, fitness, 40).unwrap();
    let resumed = simulate(first.last(), fitness, 60).unwrap();
    let combined = simulate(initial, fitness, 100).unwrap();

    assert!(approx_eq(
        resumed.last().freq_a(),
        combined.last().freq_a(),
        1e-12
    ));
    assert!(approx_eq(
        resumed.last().freq_s(),
        combined.last().freq_s(),
        1e-12
    ));
}

#[test]
fn test_zero_generations_returns_initial_only() {
    let initial = AlleleFrequencies::new(0.6, 0.4).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(0.7).unwrap();

    let trajectory = simulate(initial, fitness, 0).unwrap();
    assert_eq!(trajectory.len(), 1);
    assert_eq!(trajectory.initial(), initial);
    assert_eq!(trajectory.last(), initial);
}

#[test]
fn test_degenerate_fitness_is_a_hard_error() {
    // Allele A fixed under 100% prevalence: mean fitness is zero at the
    // very first update and the run fails rather than freezing silently.
    let initial = AlleleFrequencies::fixed(Allele::A);
    let fitness = GenotypeFitness::from_malaria_prevalence(1.0).unwrap();

    let err = simulate(initial, fitness, 5).unwrap_err();
    assert_eq!(err, SelectionError::DegenerateFitness { generation: 0 });
    assert!(err.to_string().contains("generation 0"));
}

#[test]
fn test_convergence_detection_against_equilibrium() {
    let initial = AlleleFrequencies::new(0.99, 0.01).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(0.8).unwrap();
    let trajectory = simulate(initial, fitness, 1000).unwrap();

    let converged_at = generations_to_converge(&trajectory, 1e-9).unwrap();
    let equilibrium = equilibrium_frequencies(&fitness).unwrap();

    assert!(approx_eq(
        trajectory[converged_at].freq_s(),
        equilibrium.freq_s(),
        1e-6
    ));
}

#[test]
fn test_without_malaria_sickle_allele_declines_to_loss() {
    // 0% prevalence removes the heterozygote advantage; the disease burden
    // on SS drives S steadily out.
    let initial = AlleleFrequencies::new(0.5, 0.5).unwrap();
    let fitness = GenotypeFitness::from_malaria_prevalence(0.0).unwrap();
    let trajectory = simulate(initial, fitness, 1000).unwrap();

    for delta in frequency_change(&trajectory) {
        assert!(delta <= 1e-12, "S frequency increased by {delta}");
    }
    assert!(trajectory.last().freq_s() < 0.01);
    assert!(equilibrium_frequencies(&fitness).is_none());
}
