//! Report pipeline.
//!
//! Runs the stages in order for one input file: load the table, group it by
//! species, compute mean bill depths, find the above-average penguins and
//! write the report. Nothing is written unless every earlier stage succeeds.

use crate::analysis::{group_by_species, locate_above_average, mean_by_species, penguin_records};
use crate::config::PenguinConfig;
use crate::error::Result;
use crate::loader::load_table;
use crate::models::RunSummary;
use crate::report::write_report;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run the full pipeline described by `config`
pub fn run(config: &PenguinConfig) -> Result<RunSummary> {
    let start_time = Instant::now();
    let report_path = config.resolve_report_path()?;

    info!("Loading penguin data from {}", config.input_path.display());
    let table = load_table(&config.input_path)?;
    let rows_loaded = table.values().next().map_or(0, |column| column.len());
    info!("Loaded {} rows across {} columns", rows_loaded, table.len());

    let groups = group_by_species(&table, &config.species_column);
    debug!("Grouped penguins into {} species", groups.len());

    let averages = mean_by_species(&groups, &config.bill_depth_column);
    let species_without_data = averages.values().filter(|mean| mean.is_none()).count();
    if species_without_data > 0 {
        warn!(
            "{} species have no usable {} readings",
            species_without_data, config.bill_depth_column
        );
    }
    info!("Computed average bill depths for {} species", averages.len());

    let records = penguin_records(&groups, &config.bill_depth_column, &config.body_mass_column);
    debug!("Built {} penguin records", records.len());

    let masses = locate_above_average(&records, &averages);
    info!(
        "Found {} penguins with above-average bill depths",
        masses.len()
    );

    write_report(&averages, &masses, &report_path)?;
    info!("Report written to {}", report_path.display());

    Ok(RunSummary {
        rows_loaded,
        species_count: averages.len(),
        species_without_data,
        penguin_records: records.len(),
        above_average: masses.len(),
        report_path,
        processing_time_ms: start_time.elapsed().as_millis(),
    })
}
