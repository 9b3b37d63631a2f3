//! Pairing history across committed courses.
//!
//! Records, for every team, which teams it has already shared a group with.
//! Stored as a dense symmetric co-occurrence count matrix: `commit` adds one
//! to every pair inside each group of a course, `rollback` subtracts it
//! again. Counting (rather than set union/difference) keeps `rollback` an
//! exact inverse of `commit` even for a course that repeats a pair.
//!
//! # Panics
//! Every operation indexes by [`TeamId::index`]; passing a team outside
//! `0..team_count` panics.

use super::{Course, TeamId};

/// Symmetric "has met" record for a fixed team population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairHistory {
    team_count: usize,
    /// Row-major `team_count × team_count` co-occurrence counts.
    counts: Vec<u32>,
}

impl PairHistory {
    /// Creates an empty history for `team_count` teams.
    pub fn new(team_count: usize) -> Self {
        Self {
            team_count,
            counts: vec![0; team_count * team_count],
        }
    }

    /// Size of the team population.
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Whether no pairing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    #[inline]
    fn slot(&self, a: TeamId, b: TeamId) -> usize {
        a.index() * self.team_count + b.index()
    }

    /// Number of committed courses in which `a` and `b` shared a group.
    #[inline]
    pub fn pair_count(&self, a: TeamId, b: TeamId) -> u32 {
        self.counts[self.slot(a, b)]
    }

    /// Whether `a` and `b` have shared a group. A team never meets itself.
    #[inline]
    pub fn has_met(&self, a: TeamId, b: TeamId) -> bool {
        a != b && self.pair_count(a, b) > 0
    }

    /// Teams that `team` has already shared a group with, ascending.
    pub fn seen(&self, team: TeamId) -> impl Iterator<Item = TeamId> + '_ {
        let row = team.index() * self.team_count;
        self.counts[row..row + self.team_count]
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, _)| TeamId::new(i))
    }

    /// Whether placing `candidate` together would repeat a pairing.
    ///
    /// True iff some member has already met another member of the candidate
    /// group. Stops at the first repeated pair found.
    pub fn has_met_before(&self, candidate: &[TeamId]) -> bool {
        candidate.iter().enumerate().any(|(i, &a)| {
            candidate[i + 1..].iter().any(|&b| self.has_met(a, b))
        })
    }

    /// Records every pairing inside each group of `course`.
    pub fn commit(&mut self, course: &Course) {
        for group in course.groups() {
            for (a, b) in group.pairs() {
                let (ab, ba) = (self.slot(a, b), self.slot(b, a));
                self.counts[ab] += 1;
                self.counts[ba] += 1;
            }
        }
    }

    /// Removes the pairings recorded by a previous [`commit`](Self::commit)
    /// of the same course.
    pub fn rollback(&mut self, course: &Course) {
        for group in course.groups() {
            for (a, b) in group.pairs() {
                let (ab, ba) = (self.slot(a, b), self.slot(b, a));
                debug_assert!(self.counts[ab] > 0, "rollback of uncommitted pair");
                self.counts[ab] = self.counts[ab].saturating_sub(1);
                self.counts[ba] = self.counts[ba].saturating_sub(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;

    fn ids(v: &[usize]) -> Vec<TeamId> {
        v.iter().copied().map(TeamId::new).collect()
    }

    fn course(groups: &[&[usize]]) -> Course {
        Course::new(groups.iter().map(|g| Group::new(ids(g))).collect())
    }

    fn assert_symmetric(h: &PairHistory) {
        for a in TeamId::range(h.team_count()) {
            for b in TeamId::range(h.team_count()) {
                assert_eq!(h.has_met(a, b), h.has_met(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_empty_history() {
        let h = PairHistory::new(4);
        assert!(h.is_empty());
        assert!(!h.has_met_before(&ids(&[0, 1, 2, 3])));
        assert_eq!(h.seen(TeamId::new(0)).count(), 0);
    }

    #[test]
    fn test_commit_records_group_members() {
        let mut h = PairHistory::new(6);
        h.commit(&course(&[&[0, 1], &[2, 3], &[4, 5]]));

        assert!(h.has_met(TeamId::new(0), TeamId::new(1)));
        assert!(!h.has_met(TeamId::new(0), TeamId::new(2)));
        assert!(!h.has_met(TeamId::new(0), TeamId::new(0)));
        assert_eq!(h.seen(TeamId::new(3)).collect::<Vec<_>>(), ids(&[2]));
        assert_symmetric(&h);
    }

    #[test]
    fn test_has_met_before_detects_any_member() {
        let mut h = PairHistory::new(6);
        h.commit(&course(&[&[0, 1], &[2, 3], &[4, 5]]));

        assert!(h.has_met_before(&ids(&[0, 1])));
        // Repeat pair found only via the last two members
        assert!(h.has_met_before(&ids(&[0, 4, 5])));
        assert!(!h.has_met_before(&ids(&[0, 2, 4])));
        assert!(!h.has_met_before(&ids(&[1])));
    }

    #[test]
    fn test_rollback_is_inverse_of_commit() {
        let mut h = PairHistory::new(7);
        h.commit(&course(&[&[0, 1, 6], &[2, 3], &[4, 5]]));
        let before = h.clone();

        let next = course(&[&[0, 2, 5], &[1, 4], &[3, 6]]);
        h.commit(&next);
        assert_ne!(h, before);
        h.rollback(&next);
        assert_eq!(h, before);
        assert_symmetric(&h);
    }

    #[test]
    fn test_rollback_inverse_with_repeated_pair() {
        let mut h = PairHistory::new(4);
        let first = course(&[&[0, 1], &[2, 3]]);
        h.commit(&first);
        let before = h.clone();

        // Repeats {0, 1}; rolling it back must keep the first course's record
        let repeat = course(&[&[0, 1], &[2], &[3]]);
        h.commit(&repeat);
        assert_eq!(h.pair_count(TeamId::new(0), TeamId::new(1)), 2);
        h.rollback(&repeat);
        assert_eq!(h, before);
        assert!(h.has_met(TeamId::new(0), TeamId::new(1)));
    }

    #[test]
    fn test_full_rollback_restores_empty() {
        let mut h = PairHistory::new(6);
        let c1 = course(&[&[0, 1], &[2, 3], &[4, 5]]);
        let c2 = course(&[&[0, 2], &[1, 4], &[3, 5]]);
        h.commit(&c1);
        h.commit(&c2);
        h.rollback(&c2);
        h.rollback(&c1);
        assert!(h.is_empty());
        assert_eq!(h, PairHistory::new(6));
    }
}
