//! The current selection.
//!
//! `SessionState` is the only mutable piece of a session. The catalog is
//! passed in by reference for every operation and never changes.

use tracing::{debug, info};

use crate::models::{Catalog, Student};
use crate::progress::{progress_view, ProgressView};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current: Option<Student>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Student> {
        self.current.as_ref()
    }

    /// Make the first roster entry named exactly `name` current.
    ///
    /// An unknown name clears the selection, so the view shows the
    /// not-found placeholder rather than a stale student.
    pub fn select_by_name(&mut self, catalog: &Catalog, name: &str) -> Option<&Student> {
        match catalog.select_by_name(name) {
            Some(student) => {
                info!(student = %student.name, grade = %student.grade, "Student selected");
                self.current = Some(student.clone());
            }
            None => {
                debug!(name, "No roster entry for selection");
                self.current = None;
            }
        }
        self.current.as_ref()
    }

    /// Progress for the current selection.
    pub fn view(&self, catalog: &Catalog) -> ProgressView {
        progress_view(catalog, self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldTrip;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Student::new("Jane Smith", "6"),
                Student::new("John Doe", "7"),
                Student::new("Jane Smith", "8"),
            ],
            vec![(
                "zoo".to_string(),
                FieldTrip {
                    name: "City Zoo".to_string(),
                    date: "2024-09-12".to_string(),
                    teacher: "Mr. Park".to_string(),
                    students: vec!["Smith, Jane '27".to_string()],
                },
            )],
        )
    }

    #[test]
    fn test_starts_without_selection() {
        let session = SessionState::new();
        assert!(session.current().is_none());
        assert_eq!(session.view(&catalog()), ProgressView::NotFound);
    }

    #[test]
    fn test_select_known_name() {
        let catalog = catalog();
        let mut session = SessionState::new();
        let selected = session.select_by_name(&catalog, "John Doe").cloned();
        assert_eq!(selected, Some(Student::new("John Doe", "7")));

        match session.view(&catalog) {
            ProgressView::Report(report) => {
                assert_eq!(report.student.name, "John Doe");
                assert_eq!(report.completed_count, 0);
            }
            ProgressView::NotFound => panic!("expected a report"),
        }
    }

    #[test]
    fn test_duplicate_names_select_first_entry() {
        let catalog = catalog();
        let mut session = SessionState::new();
        session.select_by_name(&catalog, "Jane Smith");
        assert_eq!(session.current().map(|s| s.grade.as_str()), Some("6"));
    }

    #[test]
    fn test_unknown_name_clears_selection() {
        let catalog = catalog();
        let mut session = SessionState::new();
        session.select_by_name(&catalog, "Jane Smith");
        assert!(session.select_by_name(&catalog, "Nobody Here").is_none());
        assert!(session.current().is_none());
        assert_eq!(session.view(&catalog), ProgressView::NotFound);
    }
}
