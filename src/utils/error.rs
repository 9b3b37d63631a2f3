use thiserror::Error;

use crate::models::TeamId;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error(
        "Could not build even the first course ({team_count} teams, groups of {group_size})"
    )]
    FirstCourseInfeasible {
        team_count: usize,
        group_size: usize,
    },

    #[error(
        "Schedule generation did not converge after {restarts} restarts ({backtracks} backtracks)"
    )]
    NonConvergence { restarts: usize, backtracks: usize },

    #[error("Team list is empty: {source_name}")]
    EmptyRoster { source_name: String },

    #[error("Team {team} is not in the roster")]
    UnknownTeam { team: TeamId },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for GroupingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

pub type Result<T> = std::result::Result<T, GroupingError>;
