//! Species grouping
//!
//! Reorganises a column-major [`RawTable`] into per-species records, and
//! flattens those groups into the [`PenguinRecord`] list used for the
//! above-average search.

use crate::constants::is_blank_reading;
use crate::models::{PenguinRecord, RawTable, Record, SpeciesGroups, Value};
use tracing::{debug, warn};

/// Group every row of `table` under its value in `species_column`.
///
/// Each record holds all other columns for that row. Rows whose species cell
/// is blank or `NA` belong to no species and are dropped. A table without the
/// species column produces no groups.
pub fn group_by_species(table: &RawTable, species_column: &str) -> SpeciesGroups {
    let mut groups = SpeciesGroups::new();

    let Some(species_cells) = table.get(species_column) else {
        if !table.is_empty() {
            warn!(
                "Column '{}' not found; no penguins can be grouped by species",
                species_column
            );
        }
        return groups;
    };

    let mut unassigned = 0;
    for (row_id, species_cell) in species_cells {
        let species = match species_cell {
            Value::Text(text) if is_blank_reading(text) => None,
            Value::Missing => None,
            other => Some(other.to_string()),
        };
        let Some(species) = species else {
            unassigned += 1;
            continue;
        };

        let record: Record = table
            .iter()
            .filter(|(name, _)| name.as_str() != species_column)
            .filter_map(|(name, column)| {
                column
                    .get(row_id)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect();

        groups
            .entry(species)
            .or_default()
            .insert(row_id.clone(), record);
    }

    if unassigned > 0 {
        debug!("{} rows had no species and were left out", unassigned);
    }

    groups
}

/// Flatten species groups into one record per penguin.
///
/// Attributes absent from a penguin's record become [`Value::Missing`].
pub fn penguin_records(
    groups: &SpeciesGroups,
    bill_depth_attribute: &str,
    body_mass_attribute: &str,
) -> Vec<PenguinRecord> {
    let attribute = |record: &Record, name: &str| record.get(name).cloned().unwrap_or(Value::Missing);

    groups
        .iter()
        .flat_map(|(species, penguins)| {
            penguins.values().map(move |record| {
                PenguinRecord::new(
                    species.clone(),
                    attribute(record, bill_depth_attribute),
                    attribute(record, body_mass_attribute),
                )
            })
        })
        .collect()
}
