//! Randomized course scheduling and schedule metrics.
//!
//! Three layers, leaves first:
//!
//! - [`GroupSampler`] draws one group with no repeated pairing, within a
//!   retry budget.
//! - [`CourseBuilder`] partitions the whole pool into one course's groups.
//! - [`ScheduleEngine`] commits courses one by one, backtracking over whole
//!   courses when one cannot be built, then verifies the full schedule and
//!   restarts from scratch if verification fails.
//!
//! Infeasibility of a group or a course is an `Option::None` outcome handled
//! by the layer above; only unrecoverable outcomes become errors.
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarises a finished schedule (pairing coverage, group
//! sizes).

mod course;
mod engine;
mod kpi;
mod sampler;

pub use course::CourseBuilder;
pub use engine::{EngineState, RunStats, ScheduleEngine};
pub use kpi::ScheduleKpi;
pub use sampler::{GroupSampler, DEFAULT_MAX_RETRIES};
