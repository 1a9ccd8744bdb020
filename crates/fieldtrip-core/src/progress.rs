//! Attendance computation for a selected student.
//!
//! `compute_progress` checks the student against every trip in catalog
//! order. The same matcher decides both the counts and the per-trip list, so
//! the two can never disagree.

use std::fmt;

use serde::Serialize;

use crate::models::{Catalog, FieldTrip, Student};
use crate::utils::format_date;

pub const NOT_FOUND_TITLE: &str = "Student not found";
pub const NOT_FOUND_HINT: &str = "Please try another search";

pub const ATTENDED_LABEL: &str = "✓ Attended";
pub const NOT_ATTENDED_LABEL: &str = "✗ Not Attended";

/// One trip as shown in the progress list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct TripAttendance {
    pub key: String,
    pub name: String,
    pub date: String,
    pub teacher: String,
    pub attended: bool,
}

impl TripAttendance {
    pub fn status_label(&self) -> &'static str {
        if self.attended {
            ATTENDED_LABEL
        } else {
            NOT_ATTENDED_LABEL
        }
    }

    /// "Sep 12, 2024 • Mr. Park"
    pub fn subtitle(&self) -> String {
        format!("{} • {}", format_date(&self.date), self.teacher)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ProgressReport {
    pub student: Student,
    pub completed_count: usize,
    pub total_count: usize,
    pub remaining: usize,
    /// Rounded half up; 0 when there are no trips
    pub percent: u32,
    pub per_trip: Vec<TripAttendance>,
}

impl ProgressReport {
    pub fn attended(&self) -> impl Iterator<Item = &TripAttendance> {
        self.per_trip.iter().filter(|t| t.attended)
    }
}

/// What the results area shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "report", rename_all = "snake_case")]
pub enum ProgressView {
    NotFound,
    Report(ProgressReport),
}

/// Trips the student attended, in catalog order.
pub fn attended_trips<'a>(catalog: &'a Catalog, student: &Student) -> Vec<&'a FieldTrip> {
    catalog
        .trips()
        .filter(|trip| trip.attended_by(&student.name))
        .collect()
}

/// Whole-number percentage, rounded half up. Zero trips is 0%.
pub fn percent_complete(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed * 200 + total) / (total * 2)) as u32
}

pub fn compute_progress(catalog: &Catalog, student: &Student) -> ProgressReport {
    let per_trip: Vec<TripAttendance> = catalog
        .trip_entries()
        .iter()
        .map(|(key, trip)| TripAttendance {
            key: key.clone(),
            name: trip.name.clone(),
            date: trip.date.clone(),
            teacher: trip.teacher.clone(),
            attended: trip.attended_by(&student.name),
        })
        .collect();

    let completed_count = per_trip.iter().filter(|t| t.attended).count();
    let total_count = per_trip.len();

    ProgressReport {
        student: student.clone(),
        completed_count,
        total_count,
        remaining: total_count - completed_count,
        percent: percent_complete(completed_count, total_count),
        per_trip,
    }
}

/// Progress for the current selection, or the not-found placeholder.
pub fn progress_view(catalog: &Catalog, selected: Option<&Student>) -> ProgressView {
    match selected {
        Some(student) => ProgressView::Report(compute_progress(catalog, student)),
        None => ProgressView::NotFound,
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressView::NotFound => {
                writeln!(f, "{}", NOT_FOUND_TITLE)?;
                writeln!(f, "{}", NOT_FOUND_HINT)
            }
            ProgressView::Report(report) => write!(f, "{}", report),
        }
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.student.name)?;
        writeln!(f, "{}", self.student.grade_label())?;
        writeln!(f)?;
        writeln!(
            f,
            "Completed: {}   Remaining: {}   Progress: {}%",
            self.completed_count, self.remaining, self.percent
        )?;
        writeln!(f)?;
        writeln!(f, "Field Trips Progress")?;
        for trip in &self.per_trip {
            writeln!(
                f,
                "  {:<15} {} ({})",
                trip.status_label(),
                trip.name,
                trip.subtitle()
            )?;
        }
        Ok(())
    }
}
