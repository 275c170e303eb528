//! Error types for the econlab CLI.

use thiserror::Error;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be found.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Input document is not valid JSON for the command.
    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but holds an out-of-range value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Engine rejected the input.
    #[error(transparent)]
    Engine(#[from] econ_core::types::EngineError),

    /// Simulation settings rejected.
    #[error("simulation settings: {0}")]
    Simulation(#[from] econ_sim::mc::ConfigError),

    /// A built-in model is missing a required variable.
    #[error("model '{model}' needs a value for '{variable}'")]
    MissingVariable {
        /// Model name.
        model: &'static str,
        /// Unbound model variable.
        variable: &'static str,
    },

    /// A model parameter is outside the range the model evaluates.
    #[error("'{parameter}' must be a number no greater than {max}, got {value}")]
    OutOfRange {
        /// Parameter name.
        parameter: &'static str,
        /// Supplied value.
        value: f64,
        /// Largest accepted value.
        max: f64,
    },
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
