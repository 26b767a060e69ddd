//! Above-average search

use crate::models::{Averages, PenguinRecord};

/// Body masses of penguins whose bill depth is strictly above their species mean.
///
/// A record counts only when its species has a finite mean, and both its
/// depth and mass are finite numbers. Everything else is skipped. Order follows `records` and
/// equal masses are all kept.
pub fn locate_above_average(records: &[PenguinRecord], averages: &Averages) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| {
            let mean = averages
                .get(&record.species)
                .copied()
                .flatten()
                .filter(|mean| mean.is_finite())?;
            let depth = record.bill_depth_mm.as_number()?;
            let mass = record.body_mass_g.as_number()?;

            (depth > mean).then_some(mass)
        })
        .collect()
}
