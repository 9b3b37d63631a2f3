//! Rotating group assignment.
//!
//! Splits a fixed population of teams into repeated rounds ("courses") of
//! equally sized groups so that no two teams share a group more than once.
//! Remainder teams are spread over the existing groups.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TeamId`, `Group`, `Course`, `Schedule`,
//!   `PairHistory`
//! - **`scheduler`**: Randomized search: `GroupSampler`, `CourseBuilder`,
//!   `ScheduleEngine`, plus `ScheduleKpi`
//! - **`validation`**: Request preconditions (team count, group size, labels)
//! - **`io`**: Team roster reader and semicolon-delimited schedule writer
//! - **`config`**: Engine ceilings, TOML loading and the CLI arguments
//!
//! # Algorithm
//!
//! Randomized sampling with a per-group retry budget, backtracking over
//! whole courses, and a final global verification with full restart. It is a
//! heuristic: it does not guarantee finding a schedule when one exists, and
//! reports non-convergence once its configurable ceilings are exhausted.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_grouping::scheduler::ScheduleEngine;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let schedule = ScheduleEngine::default().generate(3, 12, 3, &mut rng).unwrap();
//! assert!(schedule.is_valid());
//! ```

pub mod config;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod utils;
pub mod validation;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::EngineConfig;
pub use scheduler::ScheduleEngine;
pub use utils::error::{GroupingError, Result};
