//! Semicolon-delimited schedule table.
//!
//! Layout:
//!
//! ```text
//! ;Group 0;Group 1;Group 2
//! Course 0;Alpha,Bravo;Charlie,Delta;Echo,Foxtrot
//! Course 1;Alpha,Charlie;Bravo,Echo;Delta,Foxtrot
//! ```
//!
//! The header lists one column per group of the first course; each row is
//! one course with its groups' labels comma-joined.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use super::TeamRoster;
use crate::models::{Group, Schedule};
use crate::utils::error::Result;

fn group_cell(group: &Group, roster: &TeamRoster) -> Result<String> {
    let labels = group
        .teams()
        .iter()
        .map(|&t| roster.require_label(t))
        .collect::<Result<Vec<_>>>()?;
    Ok(labels.join(","))
}

/// Writes `schedule` as a semicolon-delimited table to `writer`.
pub fn write_schedule_csv<W: Write>(
    schedule: &Schedule,
    roster: &TeamRoster,
    writer: W,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer);

    let mut header = vec![String::new()];
    header.extend((0..schedule.group_count()).map(|g| format!("Group {g}")));
    wtr.write_record(&header)?;

    for (i, course) in schedule.courses.iter().enumerate() {
        let mut row = vec![format!("Course {i}")];
        for group in course.groups() {
            row.push(group_cell(group, roster)?);
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the schedule table to `path`, creating parent directories.
pub fn write_schedule_file<P: AsRef<Path>>(
    schedule: &Schedule,
    roster: &TeamRoster,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_schedule_csv(schedule, roster, file)?;
    tracing::info!(path = %path.display(), courses = schedule.course_count(), "schedule written");
    Ok(())
}
