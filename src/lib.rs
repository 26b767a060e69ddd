//! Penguin Report Library
//!
//! Reads penguin biometric measurements from CSV, computes the mean bill
//! depth of every species, and lists the body masses of penguins whose bill
//! is deeper than their species mean.
//!
//! The work is split into stages that each take the previous stage's output:
//! - [`loader`] - CSV into a column -> row -> value table
//! - [`analysis`] - species grouping, averages and the above-average search
//! - [`report`] - plain-text report rendering
//! - [`pipeline`] - runs every stage for one configured input
//!
//! Messy cells (text in numeric columns, blanks, `NA`) are skipped rather
//! than treated as errors; only I/O and unreadable CSV fail a run.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;

pub use analysis::{
    average_bill_depths, bill_depths, group_by_species, locate_above_average, penguin_records,
};
pub use config::PenguinConfig;
pub use error::{ReportError, Result};
pub use loader::{load_table, parse_table};
pub use models::{Averages, PenguinRecord, RawTable, RunSummary, SpeciesGroups, Value};
pub use pipeline::run;
pub use report::{render_report, write_report};
