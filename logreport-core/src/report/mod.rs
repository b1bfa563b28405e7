//! Report generation
//!
//! Both generators are pure functions over the records produced by
//! [`crate::records::read_logs`]. Each one folds the records into an
//! [`OrderedTally`] keyed by a single field, finalizes the tally into rows,
//! and sorts the rows by count with a stable sort so that ties keep the order
//! in which their keys first showed up.
//!
//! records
//! OrderedTally
//! rows (sorted)
//! render_table / render_json

mod average;
mod constants;
mod generate;
mod render;
mod tally;
mod types;
mod user_agents;

#[cfg(test)]
mod tests;

pub use average::generate_average_report;
pub use constants::*;
pub use generate::Report;
pub use render::{OutputFormat, TableCell, TableRow, render_json, render_table};
pub use tally::OrderedTally;
pub use types::*;
pub use user_agents::generate_user_agents_report;
