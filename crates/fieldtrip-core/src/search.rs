//! Incremental roster search.
//!
//! A plain case-insensitive substring filter in roster order. There is no
//! ranking and no tokenizing; "an" matches both "Jane" and "Nolan".

use crate::models::Student;
use crate::utils::contains_ignore_case;

/// Queries shorter than this (in characters, after trimming) show no list.
pub const MIN_QUERY_LEN: usize = 2;

/// What the suggestion list should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions<'a> {
    /// List collapsed: query too short or nothing matched
    Hidden,
    /// List visible with at least one student, in roster order
    Shown(Vec<&'a Student>),
}

impl<'a> Suggestions<'a> {
    pub fn is_shown(&self) -> bool {
        matches!(self, Suggestions::Shown(_))
    }

    pub fn students(&self) -> &[&'a Student] {
        match self {
            Suggestions::Hidden => &[],
            Suggestions::Shown(students) => students,
        }
    }
}

/// Every student whose name contains `query`, ignoring case.
pub fn search<'a>(roster: &'a [Student], query: &str) -> Vec<&'a Student> {
    roster
        .iter()
        .filter(|s| contains_ignore_case(&s.name, query))
        .collect()
}

/// Suggestion list state for the text currently in the search box.
pub fn suggest<'a>(roster: &'a [Student], query: &str) -> Suggestions<'a> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Suggestions::Hidden;
    }

    let matches = search(roster, query);
    if matches.is_empty() {
        Suggestions::Hidden
    } else {
        Suggestions::Shown(matches)
    }
}
