//! Command-line interface components.

use crate::config::PenguinConfig;
use crate::constants::{DEFAULT_INPUT_FILE, SPECIES_COLUMN};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "penguin-report")]
#[command(about = "Report average penguin bill depths and above-average body masses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// CSV file with a header row; the first column identifies each penguin
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input_path: PathBuf,

    /// Report destination (defaults to penguin_report.txt next to the executable)
    #[arg(short, long, value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Column that names each penguin's species
    #[arg(long, default_value = SPECIES_COLUMN)]
    pub species_column: String,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> PenguinConfig {
        let config = PenguinConfig::default()
            .with_input(&self.input_path)
            .with_species_column(&self.species_column);

        match &self.output_path {
            Some(path) => config.with_output(path),
            None => config,
        }
    }

    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
