//! Schedule summary metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Distinct pairings | Unordered team pairs sharing at least one group |
//! | Pairing coverage | Distinct pairings / all possible pairs |
//! | Max pair occurrence | Most courses any single pair shares (1 when valid) |
//! | Min / max group size | Smallest and largest group across all courses |

use crate::models::Schedule;

/// Summary indicators of a generated schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Number of courses.
    pub course_count: usize,
    /// Unordered pairs that met at least once.
    pub distinct_pairings: usize,
    /// Fraction of all possible pairs that met (0.0..1.0).
    pub pairing_coverage: f64,
    /// Largest number of courses any pair shares.
    pub max_pair_occurrence: usize,
    /// Smallest group size across the schedule.
    pub min_group_size: usize,
    /// Largest group size across the schedule.
    pub max_group_size: usize,
}

impl ScheduleKpi {
    /// Computes metrics for a schedule over `team_count` teams.
    pub fn calculate(schedule: &Schedule, team_count: usize) -> Self {
        let pair_counts = schedule.pair_counts();
        let possible_pairs = team_count * team_count.saturating_sub(1) / 2;

        let sizes: Vec<usize> = schedule
            .courses
            .iter()
            .flat_map(|c| c.groups().iter().map(|g| g.len()))
            .collect();
        let min_group_size = sizes.iter().copied().min().unwrap_or(0);
        let max_group_size = sizes.iter().copied().max().unwrap_or(0);

        Self {
            course_count: schedule.course_count(),
            distinct_pairings: pair_counts.len(),
            pairing_coverage: if possible_pairs == 0 {
                0.0
            } else {
                pair_counts.len() as f64 / possible_pairs as f64
            },
            max_pair_occurrence: pair_counts.values().copied().max().unwrap_or(0),
            min_group_size,
            max_group_size,
        }
    }
}
