//! Tests for the analysis stages
//!
//! Shared fixtures live here; each stage has its own test file.


use crate::models::{PenguinRecord, Record, SpeciesGroups, Value};

/// Build a record from (attribute, value) pairs
pub fn record(attributes: &[(&str, Value)]) -> Record {
    attributes
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Build species groups from (species, [records]) pairs, numbering penguins from 1
pub fn groups(species: &[(&str, Vec<Record>)]) -> SpeciesGroups {
    species
        .iter()
        .map(|(name, records)| {
            let penguins = records
                .iter()
                .enumerate()
                .map(|(i, record)| ((i + 1).to_string(), record.clone()))
                .collect();
            (name.to_string(), penguins)
        })
        .collect()
}

/// Record holding only a bill depth
pub fn depth(value: Value) -> Record {
    record(&[("bill_depth_mm", value)])
}

pub fn num(value: f64) -> Value {
    Value::Number(value)
}

pub fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub fn penguin(species: &str, bill_depth_mm: Value, body_mass_g: Value) -> PenguinRecord {
    PenguinRecord::new(species, bill_depth_mm, body_mass_g)
}
