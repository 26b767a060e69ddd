//! Configuration for a penguin report run.
//!
//! Holds the input and output locations and the column names the analysis
//! reads. Defaults match the fixed file names of the standard dataset.

use crate::constants::{
    BILL_DEPTH_COLUMN, BODY_MASS_COLUMN, DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE, SPECIES_COLUMN,
};
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenguinConfig {
    /// CSV file to read
    pub input_path: PathBuf,

    /// Explicit report destination; when unset the report goes next to the executable
    pub output_path: Option<PathBuf>,

    /// File name used when `output_path` is unset
    pub report_filename: String,

    /// Column grouping penguins into species
    pub species_column: String,

    /// Column holding bill depth readings
    pub bill_depth_column: String,

    /// Column holding body mass readings
    pub body_mass_column: String,
}

impl Default for PenguinConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: None,
            report_filename: DEFAULT_REPORT_FILE.to_string(),
            species_column: SPECIES_COLUMN.to_string(),
            bill_depth_column: BILL_DEPTH_COLUMN.to_string(),
            body_mass_column: BODY_MASS_COLUMN.to_string(),
        }
    }
}

impl PenguinConfig {
    /// Read from a different CSV file
    pub fn with_input(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Write the report to an explicit path
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Group by a different species column
    pub fn with_species_column(mut self, column: impl Into<String>) -> Self {
        self.species_column = column.into();
        self
    }

    /// Where the report will be written.
    ///
    /// An explicit `output_path` is used as given. Otherwise the report file
    /// name is joined onto the directory holding the running executable.
    pub fn resolve_report_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.output_path {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe().map_err(|e| ReportError::Configuration {
            message: format!("cannot locate executable for default report path: {}", e),
        })?;
        let base = exe.parent().ok_or_else(|| ReportError::Configuration {
            message: format!("executable {} has no parent directory", exe.display()),
        })?;

        let path = base.join(&self.report_filename);
        debug!("Resolved default report path: {}", path.display());
        Ok(path)
    }
}
