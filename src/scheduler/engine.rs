//! Course-by-course schedule engine.
//!
//! # Algorithm
//!
//! One generation attempt runs a small state machine:
//!
//! - **Building**: build a course over the full pool with the live pairing
//!   history. On success the course is pushed onto the committed stack and
//!   committed to the history. On failure the most recent course is popped
//!   and rolled back (a backtrack) and the slot is retried. Failing with an
//!   empty stack is fatal. Exceeding the per-attempt backtrack ceiling
//!   abandons the attempt.
//! - **Verifying**: the global pairwise check over all committed courses.
//! - **Success**: the verified schedule is returned.
//! - **Restarting**: schedule and history are discarded.
//!
//! Restarts run in an outer loop bounded by `max_restarts`. Backtracks are
//! also bounded across the whole run by `max_total_backtracks`. Running out
//! of either yields [`GroupingError::NonConvergence`].

use rand::Rng;

use super::{CourseBuilder, GroupSampler};
use crate::config::EngineConfig;
use crate::models::{verify_courses, Course, PairHistory, Schedule, TeamId};
use crate::utils::error::{GroupingError, Result};
use crate::validation::validate_request;

/// States of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Committing courses, backtracking on infeasible ones.
    Building,
    /// Checking the global no-repeat invariant.
    Verifying,
    /// Schedule verified.
    Success,
    /// Attempt discarded; a fresh one follows.
    Restarting,
}

/// Counters collected over a whole [`ScheduleEngine::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Full restarts performed.
    pub restarts: usize,
    /// Course backtracks summed over all attempts.
    pub backtracks: usize,
    /// Courses successfully built, including ones later discarded.
    pub courses_built: usize,
}

enum Attempt {
    Verified(Schedule),
    Abandoned,
}

/// Committed-course stack and live history of one attempt.
#[derive(Debug)]
struct Workspace {
    committed: Vec<Course>,
    history: PairHistory,
}

impl Workspace {
    fn new(team_count: usize, num_courses: usize) -> Self {
        Self {
            committed: Vec::with_capacity(num_courses),
            history: PairHistory::new(team_count),
        }
    }

    /// Discards every course and pairing from a previous attempt.
    fn reset(&mut self) {
        self.committed.clear();
        self.history = PairHistory::new(self.history.team_count());
    }
}

/// Generates schedules in which no two teams share a group twice.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_grouping::config::EngineConfig;
/// use u_grouping::scheduler::ScheduleEngine;
///
/// let engine = ScheduleEngine::new(EngineConfig::default());
/// let mut rng = SmallRng::seed_from_u64(42);
/// let schedule = engine.generate(2, 6, 2, &mut rng).unwrap();
///
/// assert_eq!(schedule.course_count(), 2);
/// assert!(schedule.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    config: EngineConfig,
    builder: CourseBuilder,
}

impl Default for ScheduleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScheduleEngine {
    /// Creates an engine with the given ceilings.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            builder: CourseBuilder::new(GroupSampler::new(config.max_retries)),
        }
    }

    /// Engine ceilings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates `num_courses` courses for teams `0..team_count` in groups of
    /// `group_size`.
    ///
    /// # Errors
    /// - [`GroupingError::InvalidInput`] if the request fails validation.
    /// - [`GroupingError::FirstCourseInfeasible`] if no course can be built
    ///   from an empty history.
    /// - [`GroupingError::NonConvergence`] if the restart ceiling is reached.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        num_courses: usize,
        team_count: usize,
        group_size: usize,
        rng: &mut R,
    ) -> Result<Schedule> {
        self.run(num_courses, team_count, group_size, rng)
            .map(|(schedule, _)| schedule)
    }

    /// Like [`generate`](Self::generate), also returning search counters.
    pub fn run<R: Rng + ?Sized>(
        &self,
        num_courses: usize,
        team_count: usize,
        group_size: usize,
        rng: &mut R,
    ) -> Result<(Schedule, RunStats)> {
        validate_request(num_courses, team_count, group_size)?;

        let pool: Vec<TeamId> = TeamId::range(team_count).collect();
        let mut stats = RunStats::default();
        let mut workspace = Workspace::new(team_count, num_courses);

        loop {
            let outcome = self.attempt(
                &mut workspace,
                &pool,
                num_courses,
                group_size,
                rng,
                &mut stats,
            )?;
            match outcome {
                Attempt::Verified(schedule) => {
                    tracing::info!(
                        courses = schedule.course_count(),
                        restarts = stats.restarts,
                        backtracks = stats.backtracks,
                        "schedule generated"
                    );
                    return Ok((schedule, stats));
                }
                Attempt::Abandoned if stats.restarts >= self.config.max_restarts => {
                    return Err(GroupingError::NonConvergence {
                        restarts: stats.restarts,
                        backtracks: stats.backtracks,
                    });
                }
                Attempt::Abandoned => {
                    stats.restarts += 1;
                    tracing::warn!(restart = stats.restarts, "restarting schedule generation");
                }
            }
        }
    }

    fn attempt<R: Rng + ?Sized>(
        &self,
        workspace: &mut Workspace,
        pool: &[TeamId],
        num_courses: usize,
        group_size: usize,
        rng: &mut R,
        stats: &mut RunStats,
    ) -> Result<Attempt> {
        workspace.reset();
        let Workspace { committed, history } = workspace;
        let mut backtracks = 0usize;
        let mut state = EngineState::Building;

        loop {
            state = match state {
                EngineState::Building if committed.len() == num_courses => EngineState::Verifying,
                EngineState::Building => {
                    match self.builder.build(pool, group_size, history, rng) {
                        Some(course) => {
                            history.commit(&course);
                            committed.push(course);
                            stats.courses_built += 1;
                            EngineState::Building
                        }
                        None => {
                            let Some(last) = committed.pop() else {
                                return Err(GroupingError::FirstCourseInfeasible {
                                    team_count: pool.len(),
                                    group_size,
                                });
                            };
                            history.rollback(&last);
                            backtracks += 1;
                            stats.backtracks += 1;
                            tracing::debug!(
                                slot = committed.len(),
                                backtracks,
                                "course infeasible, backtracking"
                            );
                            if stats.backtracks >= self.config.max_total_backtracks {
                                tracing::warn!(
                                    backtracks = stats.backtracks,
                                    "run-wide backtrack ceiling reached"
                                );
                                return Err(GroupingError::NonConvergence {
                                    restarts: stats.restarts,
                                    backtracks: stats.backtracks,
                                });
                            }
                            if backtracks >= self.config.max_backtracks {
                                tracing::warn!(backtracks, "backtrack ceiling reached");
                                EngineState::Restarting
                            } else {
                                EngineState::Building
                            }
                        }
                    }
                }
                EngineState::Verifying => {
                    let violations = verify_courses(committed);
                    if violations.is_empty() {
                        EngineState::Success
                    } else {
                        tracing::warn!(
                            violations = violations.len(),
                            "verification failed: repeated pairings"
                        );
                        EngineState::Restarting
                    }
                }
                EngineState::Success => {
                    let courses = std::mem::take(committed);
                    return Ok(Attempt::Verified(Schedule::from_courses(courses)));
                }
                EngineState::Restarting => return Ok(Attempt::Abandoned),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAX_BACKTRACKS, DEFAULT_MAX_TOTAL_BACKTRACKS};
    use crate::models::Group;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn assert_complete(schedule: &Schedule, num_courses: usize, team_count: usize) {
        assert_eq!(schedule.course_count(), num_courses);
        for course in &schedule.courses {
            assert!(course.is_partition_of(team_count));
        }
        assert!(schedule.verify().is_empty());
    }

    #[test]
    fn test_six_teams_two_courses() {
        let engine = ScheduleEngine::default();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let schedule = engine.generate(2, 6, 2, &mut rng).unwrap();
            assert_complete(&schedule, 2, 6);
            assert!(schedule
                .courses
                .iter()
                .all(|c| c.group_count() == 3 && c.groups().iter().all(|g| g.len() == 2)));
        }
    }

    #[test]
    fn test_leftover_team_schedule() {
        let engine = ScheduleEngine::new(EngineConfig::default().with_max_restarts(1000));
        let mut rng = SmallRng::seed_from_u64(11);
        let schedule = engine.generate(3, 7, 2, &mut rng).unwrap();
        assert_complete(&schedule, 3, 7);

        for course in &schedule.courses {
            let mut sizes: Vec<usize> = course.groups().iter().map(|g| g.len()).collect();
            sizes.sort_unstable();
            assert_eq!(sizes, vec![2, 2, 3]);
        }
    }

    #[test]
    fn test_larger_population() {
        let engine = ScheduleEngine::default();
        for seed in 0..5 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let schedule = engine.generate(4, 24, 3, &mut rng).unwrap();
            assert_complete(&schedule, 4, 24);
        }
    }

    #[test]
    fn test_precondition_failure() {
        let engine = ScheduleEngine::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = engine.generate(3, 4, 2, &mut rng).unwrap_err();
        match err {
            GroupingError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::InsufficientTeams);
                assert!(errors[0].message.contains("at least 6"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_course_infeasible() {
        let engine = ScheduleEngine::new(EngineConfig::default().with_max_retries(0));
        let mut rng = SmallRng::seed_from_u64(0);
        let err = engine.generate(1, 4, 2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GroupingError::FirstCourseInfeasible {
                team_count: 4,
                group_size: 2
            }
        ));
    }

    #[test]
    fn test_non_convergence() {
        // Two triples can never be regrouped into triples without a repeat
        let config = EngineConfig::default()
            .with_max_retries(10)
            .with_max_backtracks(5)
            .with_max_restarts(2);
        let engine = ScheduleEngine::new(config);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = engine.generate(2, 6, 3, &mut rng).unwrap_err();
        match err {
            GroupingError::NonConvergence {
                restarts,
                backtracks,
            } => {
                assert_eq!(restarts, 2);
                assert_eq!(backtracks, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsolvable_input_fails_fast_with_defaults() {
        let engine = ScheduleEngine::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = engine.run(2, 6, 3, &mut rng).unwrap_err();
        match err {
            GroupingError::NonConvergence {
                restarts,
                backtracks,
            } => {
                assert_eq!(backtracks, DEFAULT_MAX_TOTAL_BACKTRACKS);
                assert_eq!(
                    restarts,
                    DEFAULT_MAX_TOTAL_BACKTRACKS / DEFAULT_MAX_BACKTRACKS - 1
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_total_backtrack_ceiling() {
        let config = EngineConfig::default()
            .with_max_retries(10)
            .with_max_backtracks(4)
            .with_max_total_backtracks(10)
            .with_max_restarts(100);
        let engine = ScheduleEngine::new(config);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = engine.generate(2, 6, 3, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GroupingError::NonConvergence {
                restarts: 2,
                backtracks: 10
            }
        ));
    }

    #[test]
    fn test_verification_failure_restarts() {
        // Leftover teams are placed without a history check, so repeats are
        // only caught by verification
        let engine = ScheduleEngine::new(EngineConfig::default().with_max_restarts(1000));
        let mut restarted = 0;
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let (schedule, stats) = engine.run(3, 7, 2, &mut rng).unwrap();
            assert_complete(&schedule, 3, 7);
            assert!(schedule.is_valid());
            if stats.restarts > 0 {
                restarted += 1;
            }
        }
        assert!(restarted > 0, "no run went through a restart");
    }

    #[test]
    fn test_attempt_starts_from_fresh_history() {
        let engine = ScheduleEngine::default();
        let pool: Vec<TeamId> = TeamId::range(6).collect();

        // Leave the workspace as a discarded attempt would: everyone has met
        let mut workspace = Workspace::new(6, 2);
        let stale = Course::new(vec![Group::new(pool.clone())]);
        workspace.history.commit(&stale);
        workspace.committed.push(stale);

        let mut stats = RunStats::default();
        let mut rng = SmallRng::seed_from_u64(4);
        let outcome = engine
            .attempt(&mut workspace, &pool, 2, 2, &mut rng, &mut stats)
            .unwrap();
        match outcome {
            Attempt::Verified(schedule) => assert_complete(&schedule, 2, 6),
            Attempt::Abandoned => panic!("attempt abandoned"),
        }
    }

    #[test]
    fn test_workspace_reset() {
        let mut workspace = Workspace::new(4, 1);
        let course = Course::new(vec![Group::new(TeamId::range(4).collect())]);
        workspace.history.commit(&course);
        workspace.committed.push(course);

        workspace.reset();
        assert!(workspace.committed.is_empty());
        assert_eq!(workspace.history, PairHistory::new(4));
    }

    #[test]
    fn test_run_stats() {
        let engine = ScheduleEngine::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let (schedule, stats) = engine.run(3, 12, 3, &mut rng).unwrap();
        assert_complete(&schedule, 3, 12);
        assert!(stats.courses_built >= 3);
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let engine = ScheduleEngine::default();
        let a = engine
            .generate(3, 10, 2, &mut SmallRng::seed_from_u64(99))
            .unwrap();
        let b = engine
            .generate(3, 10, 2, &mut SmallRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_team_groups() {
        let engine = ScheduleEngine::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let schedule = engine.generate(3, 3, 1, &mut rng).unwrap();
        assert_complete(&schedule, 3, 3);
    }
}
