//! Group, course and schedule (solution) models.
//!
//! A schedule is an ordered list of courses; each course is an ordered list
//! of groups that together cover every team exactly once. The global
//! requirement on a schedule is that no pair of teams shares a group in more
//! than one course, checked by [`Schedule::verify`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::TeamId;

/// Teams sharing one course-round together.
///
/// Members are kept in draw order; leftover teams are appended at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    teams: Vec<TeamId>,
}

impl Group {
    /// Creates a group from its members.
    pub fn new(teams: Vec<TeamId>) -> Self {
        Self { teams }
    }

    /// Adds a team to the group.
    pub fn push(&mut self, team: TeamId) {
        self.teams.push(team);
    }

    /// Members in insertion order.
    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the group has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Whether `team` is a member.
    pub fn contains(&self, team: TeamId) -> bool {
        self.teams.contains(&team)
    }

    /// All unordered pairs of distinct members, as `(low, high)`.
    pub fn pairs(&self) -> impl Iterator<Item = (TeamId, TeamId)> + '_ {
        self.teams.iter().enumerate().flat_map(move |(i, &a)| {
            self.teams[i + 1..]
                .iter()
                .map(move |&b| if a < b { (a, b) } else { (b, a) })
        })
    }
}

/// One round of grouping covering all teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course {
    groups: Vec<Group>,
}

impl Course {
    /// Creates a course from its groups.
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Groups in order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of team placements across all groups.
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Whether every team in `0..team_count` appears in exactly one group
    /// and no other team appears.
    pub fn is_partition_of(&self, team_count: usize) -> bool {
        let mut placed = HashSet::with_capacity(team_count);
        for group in &self.groups {
            for &team in group.teams() {
                if team.index() >= team_count || !placed.insert(team) {
                    return false;
                }
            }
        }
        placed.len() == team_count
    }
}

/// A pair of teams sharing a group in more than one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairViolation {
    /// Lower team of the pair.
    pub first: TeamId,
    /// Higher team of the pair.
    pub second: TeamId,
    /// Number of courses in which the pair co-occurs.
    pub occurrences: usize,
}

/// A complete schedule: ordered courses of groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Courses in generation order.
    pub courses: Vec<Course>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from committed courses.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of groups per course, taken from the first course.
    pub fn group_count(&self) -> usize {
        self.courses.first().map_or(0, Course::group_count)
    }

    /// Co-occurrence count for every pair that shares at least one group.
    ///
    /// Keys are `(low, high)` ordered pairs.
    pub fn pair_counts(&self) -> BTreeMap<(TeamId, TeamId), usize> {
        count_pairs(&self.courses)
    }

    /// Global pairwise check: every pair that co-occurs in two or more
    /// courses is reported.
    pub fn verify(&self) -> Vec<PairViolation> {
        verify_courses(&self.courses)
    }

    /// Whether no pair of teams meets more than once.
    pub fn is_valid(&self) -> bool {
        self.verify().is_empty()
    }
}

fn count_pairs(courses: &[Course]) -> BTreeMap<(TeamId, TeamId), usize> {
    let mut counts = BTreeMap::new();
    for course in courses {
        for group in course.groups() {
            for pair in group.pairs() {
                *counts.entry(pair).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Pairs co-occurring in two or more of `courses`, ordered by pair.
pub fn verify_courses(courses: &[Course]) -> Vec<PairViolation> {
    count_pairs(courses)
        .into_iter()
        .filter(|&(_, n)| n >= 2)
        .map(|((first, second), occurrences)| PairViolation {
            first,
            second,
            occurrences,
        })
        .collect()
}
