//! Randomized group sampler.
//!
//! # Algorithm
//!
//! 1. Draw `group_size` distinct teams uniformly at random from the pool
//!    (sampling without replacement).
//! 2. Reject the draw if any two members have already met.
//! 3. Repeat until a valid draw is found or the retry budget runs out.
//!
//! Exhausting the budget is an expected outcome (`None`), not an error:
//! the course builder reacts by abandoning the course attempt.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{Group, PairHistory, TeamId};

/// Default number of draws per group.
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Draws single groups with no repeated pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSampler {
    max_retries: usize,
}

impl Default for GroupSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

impl GroupSampler {
    /// Creates a sampler allowing `max_retries` draws per group.
    pub fn new(max_retries: usize) -> Self {
        Self { max_retries }
    }

    /// Draw budget per group.
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Attempts to draw one group of `group_size` teams from `pool`.
    ///
    /// Neither the pool nor the history is modified; removing the drawn teams
    /// from the pool is the caller's job.
    ///
    /// Returns `None` if no valid group was drawn within the budget, or if the
    /// pool holds fewer than `group_size` teams.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        pool: &[TeamId],
        group_size: usize,
        history: &PairHistory,
        rng: &mut R,
    ) -> Option<Group> {
        if group_size > pool.len() {
            return None;
        }

        for _ in 0..self.max_retries {
            let candidate: Vec<TeamId> = pool.choose_multiple(rng, group_size).copied().collect();
            if !history.has_met_before(&candidate) {
                return Some(Group::new(candidate));
            }
        }

        tracing::trace!(
            pool = pool.len(),
            group_size,
            retries = self.max_retries,
            "group sampler exhausted its retry budget"
        );
        None
    }
}
