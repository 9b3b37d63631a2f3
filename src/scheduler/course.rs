//! Single-course construction.
//!
//! # Algorithm
//!
//! 1. `num_groups = |pool| / group_size`.
//! 2. Draw groups one at a time with [`GroupSampler`], removing each drawn
//!    group's teams from the pool before the next draw.
//! 3. If any draw is infeasible, the whole course attempt fails.
//! 4. Remaining teams (when `group_size` does not divide `|pool|`) are
//!    sorted by id and redistributed: leftover `i` joins group
//!    `i mod num_groups`.
//!
//! Leftover placement is not checked against the pairing history; a repeat
//! introduced here is caught by the schedule-level verification pass.

use rand::Rng;

use super::GroupSampler;
use crate::models::{Course, Group, PairHistory, TeamId};

/// Partitions a team pool into the groups of one course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseBuilder {
    sampler: GroupSampler,
}

impl CourseBuilder {
    /// Creates a builder drawing groups with `sampler`.
    pub fn new(sampler: GroupSampler) -> Self {
        Self { sampler }
    }

    /// The sampler used for each group draw.
    pub fn sampler(&self) -> &GroupSampler {
        &self.sampler
    }

    /// Builds one course over `pool`, or `None` if a group draw was infeasible.
    pub fn build<R: Rng + ?Sized>(
        &self,
        pool: &[TeamId],
        group_size: usize,
        history: &PairHistory,
        rng: &mut R,
    ) -> Option<Course> {
        if group_size == 0 {
            return None;
        }
        let num_groups = pool.len() / group_size;
        if num_groups == 0 {
            return None;
        }

        let mut remaining = pool.to_vec();
        let mut groups: Vec<Group> = Vec::with_capacity(num_groups);

        while groups.len() < num_groups {
            let group = self.sampler.sample(&remaining, group_size, history, rng)?;
            remaining.retain(|&t| !group.contains(t));
            groups.push(group);
        }

        remaining.sort_unstable();
        for (i, team) in remaining.into_iter().enumerate() {
            groups[i % num_groups].push(team);
        }

        Some(Course::new(groups))
    }
}
