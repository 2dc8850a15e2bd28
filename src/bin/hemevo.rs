//! Hemevo CLI - Command-line interface for hemoglobin allele-frequency
//! simulations.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use hemevo::analysis::{equilibrium_frequencies, generations_to_converge};
use hemevo::base::AlleleFrequencies;
use hemevo::evolution::GenotypeFitness;
use hemevo::simulation::{SimulationBuilder, Trajectory};

/// Hemevo - Sickle-cell / malaria heterozygote-advantage simulator
#[derive(Parser, Debug)]
#[command(name = "hemevo")]
#[command(author, version, about = "Simulates hemoglobin allele-frequency evolution under malaria-driven selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation and report the allele-frequency trajectory.
    Run {
        /// Initial frequency of allele A (proportion)
        #[arg(long, default_value = "0.6")]
        initial_a: f64,

        /// Initial frequency of allele S (proportion)
        #[arg(long, default_value = "0.4")]
        initial_s: f64,

        /// Malaria prevalence rate (%)
        #[arg(short = 'm', long, default_value = "70")]
        malaria_prevalence: f64,

        /// Number of generations to simulate
        #[arg(short = 'g', long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..=1000))]
        generations: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        progress: bool,
    },

    /// Sweep malaria prevalence across a grid and report final frequencies.
    ///
    /// Runs one independent simulation per grid point, in parallel.
    Sweep {
        /// Initial frequency of allele A (proportion)
        #[arg(long, default_value = "0.6")]
        initial_a: f64,

        /// Initial frequency of allele S (proportion)
        #[arg(long, default_value = "0.4")]
        initial_s: f64,

        /// Number of generations to simulate per grid point
        #[arg(short = 'g', long, default_value = "100", value_parser = clap::value_parser!(u64).range(1..=1000))]
        generations: u64,

        /// Number of evenly spaced prevalence values in [0%, 100%]
        #[arg(short = 'p', long, default_value = "11", value_parser = clap::value_parser!(u64).range(2..=1001))]
        points: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the fitness table and analytic equilibrium for a prevalence.
    Equilibrium {
        /// Malaria prevalence rate (%)
        #[arg(short = 'm', long, default_value = "70")]
        malaria_prevalence: f64,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            initial_a,
            initial_s,
            malaria_prevalence,
            generations,
            format,
            output,
            progress,
        } => run_simulation(
            initial_a,
            initial_s,
            malaria_prevalence,
            generations as usize,
            format,
            output.as_ref(),
            progress,
        ),
        Commands::Sweep {
            initial_a,
            initial_s,
            generations,
            points,
            format,
            output,
        } => sweep_prevalence(
            initial_a,
            initial_s,
            generations as usize,
            points as usize,
            format,
            output.as_ref(),
        ),
        Commands::Equilibrium { malaria_prevalence } => show_equilibrium(malaria_prevalence),
    }
}

/// Convert a user-facing percentage to the proportion the library expects.
/// This is the only place the percent unit exists.
fn percent_to_proportion(percent: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&percent) || percent.is_nan() {
        bail!("Malaria prevalence must be between 0% and 100% (got {percent})");
    }
    Ok(percent / 100.0)
}

fn run_simulation(
    initial_a: f64,
    initial_s: f64,
    prevalence_percent: f64,
    generations: usize,
    format: OutputFormat,
    output: Option<&PathBuf>,
    show_progress: bool,
) -> Result<()> {
    println!("🧬 Hemevo - Running Simulation");
    println!("============================================\n");

    let prevalence = percent_to_proportion(prevalence_percent)?;

    let mut sim = SimulationBuilder::new()
        .initial_frequencies(initial_a, initial_s)
        .malaria_prevalence(prevalence)
        .generations(generations)
        .build()
        .context("Invalid simulation parameters")?;

    print_parameters(initial_a, initial_s, prevalence_percent, generations, sim.fitness());

    println!("Running {generations} generations...");

    let pb = if show_progress {
        let pb = ProgressBar::new(generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for generation in 1..=generations {
        sim.step()
            .with_context(|| format!("Generation {generation}"))?;
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let fitness = *sim.fitness();
    let trajectory = sim.into_trajectory();

    let rendered = match format {
        OutputFormat::Table => render_trajectory_table(&trajectory),
        OutputFormat::Csv => render_trajectory_csv(&trajectory),
        OutputFormat::Json => {
            let report = RunReport {
                malaria_prevalence: prevalence,
                generations,
                fitness: &fitness,
                trajectory: &trajectory,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize trajectory")?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("\n✓ Trajectory written to {}", path.display());
        }
        None => {
            println!("\n{rendered}");
        }
    }

    let last = trajectory.last();
    println!("\n🎯 Final Allele Frequencies (generation {generations})");
    println!("  • Allele A: {:.3}", last.freq_a());
    println!("  • Allele S: {:.3}", last.freq_s());

    if let Some(eq) = equilibrium_frequencies(&fitness) {
        println!("  • Analytic equilibrium S: {:.3}", eq.freq_s());
    }
    if let Some(converged) = generations_to_converge(&trajectory, 1e-6) {
        println!("  • Converged (ΔS < 1e-6) at generation {converged}");
    }

    Ok(())
}

fn sweep_prevalence(
    initial_a: f64,
    initial_s: f64,
    generations: usize,
    points: usize,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    println!("🧬 Hemevo - Prevalence Sweep");
    println!("============================================\n");
    println!(
        "Running {points} simulations of {generations} generations (initial A={initial_a}, S={initial_s})...\n"
    );

    let initial =
        AlleleFrequencies::new(initial_a, initial_s).context("Invalid initial frequencies")?;

    let step = 100.0 / (points - 1) as f64;
    let rows: Result<Vec<SweepPoint>> = (0..points)
        .into_par_iter()
        .map(|i| {
            // Rounding in the grid spacing must not push the last point past 100%.
            let percent = (i as f64 * step).min(100.0);
            let prevalence = percent_to_proportion(percent)?;
            let fitness = GenotypeFitness::from_malaria_prevalence(prevalence)
                .context("Invalid malaria prevalence")?;
            let trajectory = hemevo::simulate(initial, fitness, generations)
                .with_context(|| format!("Sweep point at {percent}% failed"))?;
            let last = trajectory.last();
            Ok(SweepPoint {
                malaria_prevalence_percent: percent,
                final_freq_a: last.freq_a(),
                final_freq_s: last.freq_s(),
                equilibrium_freq_s: equilibrium_frequencies(&fitness).map(|eq| eq.freq_s()),
            })
        })
        .collect();
    let rows = rows?;

    let rendered = match format {
        OutputFormat::Table => render_sweep_table(&rows),
        OutputFormat::Csv => render_sweep_csv(&rows),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rows).context("Failed to serialize sweep")?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Sweep written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn show_equilibrium(prevalence_percent: f64) -> Result<()> {
    let prevalence = percent_to_proportion(prevalence_percent)?;
    let fitness = GenotypeFitness::from_malaria_prevalence(prevalence)
        .context("Invalid malaria prevalence")?;

    println!("🧬 Hemevo - Equilibrium Analysis\n");
    print_fitness_table(&fitness);

    match equilibrium_frequencies(&fitness) {
        Some(eq) => {
            println!("\n🎯 Stable Interior Equilibrium");
            println!("  • Allele A: {:.3}", eq.freq_a());
            println!("  • Allele S: {:.3}", eq.freq_s());
        }
        None => {
            println!("\n  • No heterozygote advantage at this prevalence;");
            println!("    selection drives allele S out of the population.");
        }
    }

    Ok(())
}

fn print_parameters(
    initial_a: f64,
    initial_s: f64,
    prevalence_percent: f64,
    generations: usize,
    fitness: &GenotypeFitness,
) {
    println!("📋 Simulation Configuration");
    println!("  • Initial Allele A: {initial_a} [--initial-a]");
    println!("  • Initial Allele S: {initial_s} [--initial-s]");
    println!("  • Malaria Prevalence: {prevalence_percent}% [-m, --malaria-prevalence]");
    println!("  • Generations: {generations} [-g, --generations]");
    println!();
    print_fitness_table(fitness);
    println!();
}

fn print_fitness_table(fitness: &GenotypeFitness) {
    println!("⚡ Genotype Fitness");
    println!("  • AA (malaria-susceptible): {:.3}", *fitness.homozygous_a);
    println!("  • AS (resistant carrier):   {:.3}", *fitness.heterozygous);
    println!("  • SS (sickle-cell disease): {:.3}", *fitness.homozygous_s);
}

fn render_trajectory_table(trajectory: &Trajectory) -> String {
    let mut out = String::from("generation  freq_a   freq_s\n");
    for (generation, freqs) in trajectory.iter().enumerate() {
        out.push_str(&format!(
            "{generation:>10}  {:.5}  {:.5}\n",
            freqs.freq_a(),
            freqs.freq_s()
        ));
    }
    out
}

fn render_trajectory_csv(trajectory: &Trajectory) -> String {
    let mut out = String::from("generation,freq_a,freq_s\n");
    for (generation, freqs) in trajectory.iter().enumerate() {
        out.push_str(&format!(
            "{generation},{},{}\n",
            freqs.freq_a(),
            freqs.freq_s()
        ));
    }
    out
}

fn render_sweep_table(rows: &[SweepPoint]) -> String {
    let mut out = String::from("prevalence%  final_a  final_s  equilibrium_s\n");
    for row in rows {
        let eq = row
            .equilibrium_freq_s
            .map(|v| format!("{v:.5}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>10.1}  {:.5}  {:.5}  {eq}\n",
            row.malaria_prevalence_percent, row.final_freq_a, row.final_freq_s
        ));
    }
    out
}

fn render_sweep_csv(rows: &[SweepPoint]) -> String {
    let mut out = String::from("malaria_prevalence_percent,final_freq_a,final_freq_s,equilibrium_freq_s\n");
    for row in rows {
        let eq = row
            .equilibrium_freq_s
            .map(|v| v.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{eq}\n",
            row.malaria_prevalence_percent, row.final_freq_a, row.final_freq_s
        ));
    }
    out
}

#[derive(Serialize)]
struct RunReport<'a> {
    malaria_prevalence: f64,
    generations: usize,
    fitness: &'a GenotypeFitness,
    trajectory: &'a Trajectory,
}

#[derive(Serialize)]
struct SweepPoint {
    malaria_prevalence_percent: f64,
    final_freq_a: f64,
    final_freq_s: f64,
    equilibrium_freq_s: Option<f64>,
}
