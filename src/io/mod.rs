//! Input and output around the scheduling core.
//!
//! - [`TeamRoster`] reads team labels (one per line) and maps them to
//!   positional [`TeamId`](crate::models::TeamId)s.
//! - [`write_schedule_csv`] / [`write_schedule_file`] serialize a schedule as
//!   a semicolon-delimited table of labels.

mod output;
mod roster;

pub use output::{write_schedule_csv, write_schedule_file};
pub use roster::TeamRoster;
