use std::error;
use std::fmt;

use crate::base::Allele;

/// Errors raised while validating caller-supplied simulation inputs.
///
/// All input validation happens before any simulation work; a rejected
/// configuration never produces a partial trajectory.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// An initial allele frequency was outside [0.0, 1.0] (or NaN).
    FrequencyOutOfRange { allele: Allele, value: f64 },
    /// The initial frequencies did not sum to 1.0 within the input tolerance.
    FrequenciesDoNotSumToOne { sum: f64 },
    /// Malaria prevalence proportion was outside [0.0, 1.0] (or NaN).
    PrevalenceOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrequencyOutOfRange { allele, value } => {
                write!(
                    f,
                    "Initial frequency of allele {allele} is {value} (must be between 0.0 and 1.0)"
                )
            }
            Self::FrequenciesDoNotSumToOne { sum } => {
                write!(
                    f,
                    "Initial frequencies of A and S must sum to 1.0 (got {sum})"
                )
            }
            Self::PrevalenceOutOfRange(value) => {
                write!(
                    f,
                    "Malaria prevalence proportion is {value} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for ConfigError {}

/// Errors that can occur while applying selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Population mean fitness was zero at the named generation, so the
    /// normalized frequency update is undefined. Reachable only when every
    /// genotype present has zero fitness (e.g. 100% malaria prevalence with
    /// allele A fixed).
    DegenerateFitness { generation: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateFitness { generation } => {
                write!(
                    f,
                    "Mean fitness is zero at generation {generation}; allele frequency update is undefined"
                )
            }
        }
    }
}

impl error::Error for SelectionError {}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidConfig(ConfigError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::InvalidConfig(err) => {
                write!(f, "Invalid parameter: {err}")
            }
        }
    }
}

impl error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::MissingRequired(_) => None,
        }
    }
}

impl From<ConfigError> for BuilderError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

/// Any failure a full simulation run can produce.
#[derive(Debug)]
pub enum SimulationError {
    Config(ConfigError),
    Selection(SelectionError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Invalid input: {err}"),
            Self::Selection(err) => write!(f, "Selection failed: {err}"),
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Selection(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<SelectionError> for SimulationError {
    fn from(err: SelectionError) -> Self {
        Self::Selection(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display_names_constraint() {
        let err = ConfigError::FrequenciesDoNotSumToOne { sum: 1.2 };
        let msg = err.to_string();
        assert!(msg.contains("sum to 1.0"));
        assert!(msg.contains("1.2"));

        let err = ConfigError::FrequencyOutOfRange {
            allele: Allele::S,
            value: 1.5,
        };
        assert!(err.to_string().contains("allele S"));

        let err = ConfigError::PrevalenceOutOfRange(1.7);
        assert!(err.to_string().contains("prevalence"));
    }

    #[test]
    fn test_selection_error_display_names_generation() {
        let err = SelectionError::DegenerateFitness { generation: 7 };
        let msg = err.to_string();
        assert!(msg.contains("generation 7"));
        assert!(msg.contains("Mean fitness is zero"));
    }

    #[test]
    fn test_builder_error_from_config() {
        let err: BuilderError = ConfigError::PrevalenceOutOfRange(2.0).into();
        assert!(matches!(err, BuilderError::InvalidConfig(_)));
        assert!(err.to_string().contains("Invalid parameter"));
    }

    #[test]
    fn test_simulation_error_wraps_both_kinds() {
        let err: SimulationError = ConfigError::PrevalenceOutOfRange(-0.1).into();
        assert!(err.to_string().contains("Invalid input"));

        let err: SimulationError = SelectionError::DegenerateFitness { generation: 0 }.into();
        assert!(err.to_string().contains("Selection failed"));
    }
}
