//! Search box state machine.
//!
//! Tracks the query text, focus, and whether the suggestion list is open.
//! It holds no data of its own; every operation that needs suggestions is
//! handed the roster. Time is passed in explicitly so the blur grace delay
//! is driven by the event loop tick.

use std::time::{Duration, Instant};

use fieldtrip_core::{suggest, Student};

/// How long the suggestion list stays open after the box loses focus, so a
/// click on the list still lands on a visible row.
pub const BLUR_GRACE: Duration = Duration::from_millis(200);

/// Maximum length for the query text.
/// Longer than any realistic student name.
const MAX_QUERY_LENGTH: usize = 64;

#[derive(Debug, Default)]
pub struct SearchBox {
    pub query: String,
    pub focused: bool,
    list_visible: bool,
    highlight: Option<usize>,
    hide_at: Option<Instant>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Suggestions currently on screen (empty when the list is closed)
    pub fn suggestions<'a>(&self, roster: &'a [Student]) -> Vec<&'a Student> {
        if !self.list_visible {
            return Vec::new();
        }
        suggest(roster, &self.query).students().to_vec()
    }

    pub fn push_char(&mut self, c: char, roster: &[Student]) {
        if can_add_query_char(self.query.chars().count(), c) {
            self.query.push(c);
            self.refresh(roster);
        }
    }

    pub fn pop_char(&mut self, roster: &[Student]) {
        if self.query.pop().is_some() {
            self.refresh(roster);
        }
    }

    /// Re-evaluate the list after the query changed.
    fn refresh(&mut self, roster: &[Student]) {
        self.list_visible = suggest(roster, &self.query).is_shown();
        self.highlight = None;
        self.hide_at = None;
    }

    /// Regaining focus reopens the list when the query is long enough.
    pub fn focus(&mut self, roster: &[Student]) {
        self.focused = true;
        self.hide_at = None;
        self.list_visible = suggest(roster, &self.query).is_shown();
    }

    /// Losing focus closes the list after `BLUR_GRACE`.
    pub fn blur(&mut self, now: Instant) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if self.list_visible {
            self.hide_at = Some(now + BLUR_GRACE);
        }
    }

    /// Apply any pending hide whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_at {
            if now >= deadline {
                self.close();
            }
        }
    }

    pub fn move_highlight_down(&mut self, count: usize) {
        if !self.list_visible || count == 0 {
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(i) => (i + 1).min(count - 1),
        });
    }

    pub fn move_highlight_up(&mut self) {
        if !self.list_visible {
            return;
        }
        // Moving above the first row returns to the text field
        self.highlight = match self.highlight {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Activate a suggestion row. Returns the roster name to select; the
    /// query becomes that name and the list closes.
    pub fn activate<'a>(&mut self, index: usize, roster: &'a [Student]) -> Option<&'a Student> {
        let student = *self.suggestions(roster).get(index)?;
        self.query = student.name.clone();
        self.close();
        Some(student)
    }

    fn close(&mut self) {
        self.list_visible = false;
        self.highlight = None;
        self.hide_at = None;
    }
}

/// Check if a query character should be accepted (no control characters)
pub fn can_add_query_char(current_len: usize, c: char) -> bool {
    current_len < MAX_QUERY_LENGTH && !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student::new("Jane Smith", "6"),
            Student::new("Janet Lee", "7"),
            Student::new("John Doe", "7"),
        ]
    }

    fn typed(query: &str, roster: &[Student]) -> SearchBox {
        let mut search = SearchBox::new();
        for c in query.chars() {
            search.push_char(c, roster);
        }
        search
    }

    #[test]
    fn test_short_query_keeps_list_hidden() {
        let roster = roster();
        let search = typed("j", &roster);
        assert!(!search.list_visible());
        assert!(search.suggestions(&roster).is_empty());
    }

    #[test]
    fn test_two_chars_open_list() {
        let roster = roster();
        let search = typed("ja", &roster);
        assert!(search.list_visible());
        assert_eq!(search.suggestions(&roster).len(), 2);
    }

    #[test]
    fn test_no_matches_keeps_list_hidden() {
        let roster = roster();
        assert!(!typed("xq", &roster).list_visible());
    }

    #[test]
    fn test_backspace_below_two_chars_hides() {
        let roster = roster();
        let mut search = typed("ja", &roster);
        search.pop_char(&roster);
        assert!(!search.list_visible());
    }

    #[test]
    fn test_activate_fills_query_and_closes() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        let student = search.activate(1, &roster).unwrap();
        assert_eq!(student.name, "Janet Lee");
        assert_eq!(search.query, "Janet Lee");
        assert!(!search.list_visible());
    }

    #[test]
    fn test_activate_out_of_range() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        assert!(search.activate(5, &roster).is_none());
        assert!(search.list_visible());
    }

    #[test]
    fn test_blur_hides_only_after_grace_delay() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        let now = Instant::now();

        search.blur(now);
        search.tick(now + Duration::from_millis(50));
        assert!(search.list_visible());

        // A click landing inside the grace window still activates
        let student = search.activate(0, &roster).map(|s| s.name.clone());
        assert_eq!(student.as_deref(), Some("Jane Smith"));

        let mut search = typed("jan", &roster);
        search.blur(now);
        search.tick(now + BLUR_GRACE);
        assert!(!search.list_visible());
    }

    #[test]
    fn test_refocus_reopens_list() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        let now = Instant::now();
        search.blur(now);
        search.tick(now + BLUR_GRACE);
        assert!(!search.list_visible());

        search.focus(&roster);
        assert!(search.focused);
        assert!(search.list_visible());
    }

    #[test]
    fn test_refocus_cancels_pending_hide() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        let now = Instant::now();
        search.blur(now);
        search.focus(&roster);
        search.tick(now + BLUR_GRACE * 2);
        assert!(search.list_visible());
    }

    #[test]
    fn test_highlight_moves_within_bounds() {
        let roster = roster();
        let mut search = typed("jan", &roster);
        assert_eq!(search.highlight(), None);
        search.move_highlight_down(2);
        search.move_highlight_down(2);
        search.move_highlight_down(2);
        assert_eq!(search.highlight(), Some(1));
        search.move_highlight_up();
        search.move_highlight_up();
        assert_eq!(search.highlight(), None);
    }

    #[test]
    fn test_can_add_query_char() {
        assert!(can_add_query_char(0, 'a'));
        assert!(can_add_query_char(63, '\''));
        assert!(!can_add_query_char(64, 'a'));
        assert!(!can_add_query_char(0, '\n'));
        assert!(!can_add_query_char(0, '\t'));
    }
}
