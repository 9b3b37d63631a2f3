//! Team roster: the display labels behind positional team ids.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::TeamId;
use crate::utils::error::{GroupingError, Result};
use crate::validation::validate_labels;

/// Ordered team labels; a team's [`TeamId`] is its position in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    labels: Vec<String>,
}

impl TeamRoster {
    /// Creates a roster from labels, rejecting duplicates.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        validate_labels(&labels)?;
        Ok(Self { labels })
    }

    /// Reads one label per line. Surrounding whitespace is trimmed and blank
    /// lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut labels = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let label = line.trim();
            if !label.is_empty() {
                labels.push(label.to_string());
            }
        }

        if labels.is_empty() {
            return Err(GroupingError::EmptyRoster {
                source_name: source_name.to_string(),
            });
        }

        tracing::debug!(teams = labels.len(), source = source_name, "roster loaded");
        Self::new(labels)
    }

    /// Reads a roster file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the roster has no teams.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of `team`, if it belongs to this roster.
    pub fn label(&self, team: TeamId) -> Option<&str> {
        self.labels.get(team.index()).map(String::as_str)
    }

    /// Label of `team`, or [`GroupingError::UnknownTeam`].
    pub fn require_label(&self, team: TeamId) -> Result<&str> {
        self.label(team).ok_or(GroupingError::UnknownTeam { team })
    }

    /// All labels in id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_trims_and_skips_blank_lines() {
        let input = "Alpha\n  Bravo  \n\nCharlie\r\n   \n";
        let roster = TeamRoster::from_reader(input.as_bytes(), "inline").unwrap();
        assert_eq!(roster.labels(), &["Alpha", "Bravo", "Charlie"]);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.label(TeamId::new(1)), Some("Bravo"));
        assert_eq!(roster.label(TeamId::new(3)), None);
    }

    #[test]
    fn test_empty_roster() {
        let err = TeamRoster::from_reader("\n\n".as_bytes(), "blank.txt").unwrap_err();
        assert!(matches!(err, GroupingError::EmptyRoster { .. }));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let err = TeamRoster::from_reader("A\nB\nA\n".as_bytes(), "dup").unwrap_err();
        assert!(matches!(err, GroupingError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TeamRoster::from_path("/nonexistent/teams.txt").unwrap_err();
        assert!(matches!(err, GroupingError::IoError(_)));
    }

    #[test]
    fn test_require_label() {
        let roster = TeamRoster::new(vec!["A".into()]).unwrap();
        assert_eq!(roster.require_label(TeamId::new(0)).unwrap(), "A");
        assert!(matches!(
            roster.require_label(TeamId::new(2)),
            Err(GroupingError::UnknownTeam { .. })
        ));
    }
}
