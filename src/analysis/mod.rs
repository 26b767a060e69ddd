//! Bill depth analysis stages.
//!
//! Turns a loaded [`RawTable`](crate::models::RawTable) into per-species
//! results:
//! - [`grouping`] - species grouping and the flat per-penguin record list
//! - [`depths`] - flat list of every usable bill depth reading
//! - [`averages`] - per-species mean bill depth
//! - [`locator`] - body masses of penguins deeper-billed than their species mean
//!
//! Every stage is best-effort over messy data: cells that are text, blank or
//! absent are skipped, never reported as errors.

pub mod averages;
pub mod depths;
pub mod grouping;
pub mod locator;

#[cfg(test)]
pub mod tests;

pub use averages::{average_bill_depths, mean_by_species};
pub use depths::{bill_depths, readings};
pub use grouping::{group_by_species, penguin_records};
pub use locator::locate_above_average;
