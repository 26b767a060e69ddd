//! Per-species mean bill depth

use crate::constants::BILL_DEPTH_COLUMN;
use crate::models::{Averages, SpeciesGroups};

/// Mean bill depth for every species in `groups`
pub fn average_bill_depths(groups: &SpeciesGroups) -> Averages {
    mean_by_species(groups, BILL_DEPTH_COLUMN)
}

/// Arithmetic mean of `attribute` for every species.
///
/// Only values that are already numeric count. A species with none, or
/// whose mean is not finite, gets `None` rather than being dropped, so the
/// result has exactly one entry per species in `groups`.
pub fn mean_by_species(groups: &SpeciesGroups, attribute: &str) -> Averages {
    groups
        .iter()
        .map(|(species, penguins)| {
            let values: Vec<f64> = penguins
                .values()
                .filter_map(|record| record.get(attribute)?.as_number())
                .collect();

            let mean = if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            };

            // A sum that overflows has no usable mean either
            let mean = mean.filter(|mean| mean.is_finite());

            (species.clone(), mean)
        })
        .collect()
}
