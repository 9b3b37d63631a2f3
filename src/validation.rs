//! Input validation for grouping requests.
//!
//! Checks the request parameters before any scheduling work begins.
//! Detects:
//! - Zero courses or zero group size
//! - Too few teams for the requested courses and group size
//! - Duplicate team labels
//!
//! All detected problems are returned together.

use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Number of courses is zero.
    ZeroCourses,
    /// Group size is zero.
    ZeroGroupSize,
    /// Fewer teams than `teams_per_group * courses`.
    InsufficientTeams,
    /// Two teams share the same label.
    DuplicateLabel,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the parameters of a grouping request.
///
/// Requires `num_courses >= 1`, `group_size >= 1` and
/// `team_count >= group_size * num_courses`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    num_courses: usize,
    team_count: usize,
    group_size: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if num_courses == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCourses,
            "Number of courses must be at least 1",
        ));
    }

    if group_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroGroupSize,
            "Number of teams per group must be at least 1",
        ));
    }

    let required = group_size.saturating_mul(num_courses);
    if team_count < required {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientTeams,
            format!(
                "Expected number of teams to be at least {required} (teams_per_group * courses). \
                 Received {team_count} teams."
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every team label is unique.
pub fn validate_labels<S: AsRef<str>>(labels: &[S]) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for label in labels {
        let label = label.as_ref();
        if !seen.insert(label) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLabel,
                format!("Duplicate team label: {label}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
