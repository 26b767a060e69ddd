//! Application constants for the penguin report
//!
//! Default file names, the column names the analysis reads, and the
//! fixed text fragments of the report layout.

// =============================================================================
// File Names
// =============================================================================

/// Input file read when no path is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "penguins.csv";

/// Report file name, resolved next to the executable unless overridden
pub const DEFAULT_REPORT_FILE: &str = "penguin_report.txt";

// =============================================================================
// Column Names
// =============================================================================

/// Column used to group penguins into species
pub const SPECIES_COLUMN: &str = "species";

/// Bill depth in millimetres
pub const BILL_DEPTH_COLUMN: &str = "bill_depth_mm";

/// Body mass in grams
pub const BODY_MASS_COLUMN: &str = "body_mass_g";

/// Sentinel the source data uses for "not available"
pub const MISSING_SENTINEL: &str = "NA";

// =============================================================================
// Report Layout
// =============================================================================

pub mod report_text {
    pub const TITLE: &str = "Penguin Bill Depth Report";
    pub const TITLE_RULE: &str = "=========================";
    pub const AVERAGES_HEADING: &str = "Average Bill Depths (mm):";
    pub const NO_AVERAGES: &str = "No data available.";
    pub const MASSES_HEADING: &str = "Body Masses of Penguins Above Average Depth:";
    pub const NO_MASSES: &str = "None";

    /// Printed in place of a mean for a species with no usable readings
    pub const NOT_AVAILABLE: &str = "N/A";
}

/// True when a text cell carries no reading at all
pub fn is_blank_reading(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == MISSING_SENTINEL
}
