use serde::{Deserialize, Serialize};

/// A field trip record as stored in the trips document.
///
/// `students` holds attendee names exactly as the trip source recorded them.
/// They may use "Last, First 'YY" while the roster uses "First Last", so
/// never compare them to roster names with `==`; use `matching::names_match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct FieldTrip {
    pub name: String,
    pub date: String,
    pub teacher: String,
    #[serde(default)]
    pub students: Vec<String>,
}

impl FieldTrip {
    /// Check whether any recorded attendee is the given student.
    pub fn attended_by(&self, student_name: &str) -> bool {
        self.students
            .iter()
            .any(|attendee| crate::matching::names_match(student_name, attendee))
    }
}
