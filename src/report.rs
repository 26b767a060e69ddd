//! Plain-text report rendering and output.

use crate::constants::report_text::{
    AVERAGES_HEADING, MASSES_HEADING, NO_AVERAGES, NO_MASSES, NOT_AVAILABLE, TITLE, TITLE_RULE,
};
use crate::error::{ReportError, Result};
use crate::models::Averages;
use std::path::Path;
use tracing::debug;

/// Render the report text for `averages` and the above-average `masses`
pub fn render_report(averages: &Averages, masses: &[f64]) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        TITLE_RULE.to_string(),
        String::new(),
        AVERAGES_HEADING.to_string(),
    ];

    if averages.is_empty() {
        lines.push(NO_AVERAGES.to_string());
    } else {
        lines.extend(averages.iter().map(|(species, average)| match average {
            Some(mean) => format!(" - {}: {:.2} mm", species, mean),
            None => format!(" - {}: {}", species, NOT_AVAILABLE),
        }));
    }

    lines.push(String::new());
    lines.push(MASSES_HEADING.to_string());

    if masses.is_empty() {
        lines.push(NO_MASSES.to_string());
    } else {
        let listed: Vec<String> = masses.iter().map(|mass| format!("{}g", mass)).collect();
        lines.push(listed.join(", "));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Render the report and write it to `path`, replacing any existing file
pub fn write_report(averages: &Averages, masses: &[f64], path: &Path) -> Result<()> {
    let report = render_report(averages, masses);

    std::fs::write(path, report.as_bytes()).map_err(|source| ReportError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {}", report.len(), path.display());
    Ok(())
}
