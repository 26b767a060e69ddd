//! Flat bill depth readings

use crate::constants::{BILL_DEPTH_COLUMN, is_blank_reading};
use crate::models::{SpeciesGroups, Value};

/// Every usable bill depth, species by species in group order
pub fn bill_depths(groups: &SpeciesGroups) -> Vec<f64> {
    readings(groups, BILL_DEPTH_COLUMN)
}

/// Every usable reading of `attribute` across all species.
///
/// Unlike the averaging stage this also accepts numeric text, so it works on
/// groups built from raw strings. Absent, blank, `NA` and unparseable
/// readings are skipped.
pub fn readings(groups: &SpeciesGroups, attribute: &str) -> Vec<f64> {
    groups
        .values()
        .flat_map(|penguins| penguins.values())
        .filter_map(|record| record.get(attribute).and_then(reading))
        .collect()
}

fn reading(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => Some(*number),
        Value::Text(text) if is_blank_reading(text) => None,
        Value::Text(text) => text.trim().parse().ok(),
        Value::Missing => None,
    }
}
