//! CSV table loading.
//!
//! Reads a header-first CSV into a [`RawTable`]: column name -> row
//! identifier -> value. Every column is read as text and each cell is then
//! coerced to a number where it parses, so a single stray token never
//! changes the type of a whole column.

use crate::error::{ReportError, Result};
use crate::models::{Column, RawTable, Value};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Load a CSV file into a [`RawTable`]
pub fn load_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(ReportError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let table = parse_table(bytes)?;

    debug!(
        "Loaded {}: {} attribute columns, {} rows",
        path.display(),
        table.len(),
        table.values().next().map_or(0, |column| column.len())
    );

    Ok(table)
}

/// Parse CSV bytes into a [`RawTable`].
///
/// The first header cell labels the row identifier; it keys every other
/// column and does not appear as a column itself. An empty input or a
/// header with no data rows yields an empty table.
///
/// Cells past the header's width are dropped, blank lines are skipped, and a
/// repeated header name maps to one column where the rightmost cell wins.
pub fn parse_table(bytes: Vec<u8>) -> Result<RawTable> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawTable::new());
    }

    // The header is read as an ordinary row so repeated names keep their text.
    // infer_schema_length of 0 reads every column as String.
    let df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| {
            options
                .with_missing_is_null(false)
                .with_truncate_ragged_lines(true)
        })
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            Ok(column
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|cell| cell.unwrap_or_default().to_string())
                .collect::<Vec<String>>())
        })
        .collect::<PolarsResult<Vec<_>>>()?;

    let Some((id_cells, attribute_columns)) = columns.split_first() else {
        return Ok(RawTable::new());
    };

    let data_rows: Vec<usize> = (1..df.height())
        .filter(|&row| !columns.iter().all(|cells| cells[row].trim().is_empty()))
        .collect();

    let skipped = df.height().saturating_sub(1) - data_rows.len();
    if skipped > 0 {
        debug!("Skipped {} blank rows", skipped);
    }

    if data_rows.is_empty() {
        return Ok(RawTable::new());
    }

    let mut table = RawTable::with_capacity(attribute_columns.len());
    for cells in attribute_columns {
        let values: &mut Column = table.entry(cells[0].clone()).or_default();
        for &row in &data_rows {
            values.insert(id_cells[row].clone(), Value::parse(&cells[row]));
        }
    }

    Ok(table)
}
