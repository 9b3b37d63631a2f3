//! Team identity.
//!
//! Teams are referenced positionally: a [`TeamId`] is the index of the team
//! in the caller's input list. Display labels are held by the I/O layer
//! ([`crate::io::TeamRoster`]), never by the scheduling core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque team identifier (ordinal index into the input team list).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(usize);

impl TeamId {
    /// Creates an identifier from a positional index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Positional index of this team.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// All identifiers for a population of `count` teams, in order.
    pub fn range(count: usize) -> impl Iterator<Item = TeamId> {
        (0..count).map(TeamId)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_positional() {
        let ids: Vec<TeamId> = TeamId::range(3).collect();
        assert_eq!(ids, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
        assert_eq!(ids[2].index(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(TeamId::new(7).to_string(), "T7");
    }

    #[test]
    fn test_serializes_as_index() {
        let json = serde_json::to_string(&TeamId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
