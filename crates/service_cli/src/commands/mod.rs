//! CLI command implementations
//!
//! Each submodule reads one JSON document, runs one calculator and prints
//! the JSON result on stdout. Logs go to stderr.

pub mod appraise;
pub mod auction;
pub mod breakeven;
pub mod check;
pub mod decide;
pub mod earned_value;
pub mod simulate;
pub mod sensitivity;
pub mod sizing;
pub mod tree;

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::{CliError, Result};

/// Read and parse an input document; `-` reads stdin.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T> {
    let io_error = |source: std::io::Error| CliError::Io {
        path: path.to_string(),
        source,
    };

    let text = if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        text
    } else {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
        std::fs::read_to_string(path).map_err(io_error)?
    };

    debug!(path, bytes = text.len(), "input document read");
    Ok(serde_json::from_str(&text)?)
}

/// Render a result as pretty or single-line JSON.
pub fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

/// Print a result on stdout.
pub fn emit<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    println!("{}", render(value, compact)?);
    Ok(())
}
