//! Grouping domain models.
//!
//! Provides the data types shared by the scheduling core and the I/O layer.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`TeamId`] | Positional team identifier |
//! | [`Group`] | Teams sharing one round together |
//! | [`Course`] | One round: a partition of all teams into groups |
//! | [`Schedule`] | Ordered courses |
//! | [`PairHistory`] | Who has already met whom in committed courses |

mod history;
mod schedule;
mod team;

pub use history::PairHistory;
pub use schedule::{verify_courses, Course, Group, PairViolation, Schedule};
pub use team::TeamId;
