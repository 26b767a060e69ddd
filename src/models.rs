//! Core data structures for penguin report processing.
//!
//! Defines the cell value union, the table and species-group shapes passed
//! between pipeline stages, and the statistics returned by a run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single cell: a number when the text parsed as one, otherwise the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    /// Explicit null for an attribute that exists but holds nothing
    Missing,
}

impl Value {
    /// Coerce raw cell text, keeping the original text when it is not numeric
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    /// The value if it is already numeric and finite
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) if number.is_finite() => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => f.write_str(text),
            Value::Missing => Ok(()),
        }
    }
}

/// Row identifier -> cell, in file order
pub type Column = IndexMap<String, Value>;

/// Column name -> column, in header order
pub type RawTable = IndexMap<String, Column>;

/// Attribute name -> value for one penguin
pub type Record = IndexMap<String, Value>;

/// Species -> penguin identifier -> record
pub type SpeciesGroups = IndexMap<String, IndexMap<String, Record>>;

/// Species -> mean bill depth, `None` when the species had no usable reading
pub type Averages = IndexMap<String, Option<f64>>;

/// Flat per-penguin view used by the above-average search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenguinRecord {
    pub species: String,
    pub bill_depth_mm: Value,
    pub body_mass_g: Value,
}

impl PenguinRecord {
    pub fn new(species: impl Into<String>, bill_depth_mm: Value, body_mass_g: Value) -> Self {
        Self {
            species: species.into(),
            bill_depth_mm,
            body_mass_g,
        }
    }
}

/// Counts gathered during one run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub species_count: usize,
    pub species_without_data: usize,
    pub penguin_records: usize,
    pub above_average: usize,
    pub report_path: PathBuf,
    pub processing_time_ms: u128,
}
