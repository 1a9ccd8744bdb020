use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// The grade is kept as the raw label from the roster document ("7", "K",
/// "Pre-K", ...), so it is never parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Student {
    pub name: String,
    pub grade: String,
}

impl Student {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
        }
    }

    /// Grade badge text, e.g. "Grade 7"
    pub fn grade_label(&self) -> String {
        format!("Grade {}", self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_label_uses_raw_label() {
        assert_eq!(Student::new("Jane Smith", "7").grade_label(), "Grade 7");
        assert_eq!(Student::new("Ada Lee", "K").grade_label(), "Grade K");
    }
}
