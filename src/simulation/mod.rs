//! Simulation engine, configuration, and trajectory recording.
//!
//! This module provides the generation loop and the configuration and
//! result types around it.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod trajectory;

pub use builder::SimulationBuilder;
pub use engine::{simulate, simulate_from_raw, Simulation};
pub use parameters::SimulationConfig;
pub use trajectory::Trajectory;
