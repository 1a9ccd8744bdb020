//! Application state management for the field trip tracker.
//!
//! This module contains the `App` struct that owns the catalog, the session
//! selection, the search box, and the background load coordination.

use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use fieldtrip_core::{
    load_catalog, Catalog, Config, ProgressView, SessionState, SourceClient, Student,
};

use crate::search_box::SearchBox;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A load sends exactly one message.
const CHANNEL_BUFFER_SIZE: usize = 4;

/// Number of rows to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Current UI focus area (search box or results panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Progress of the catalog load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Observable state of the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Suggesting,
    Selected,
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Result of the background catalog load
enum LoadResult {
    Loaded(Catalog),
    Failed(String),
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,

    // UI State
    pub state: AppState,
    pub focus: Focus,
    pub search: SearchBox,
    pub results_scroll: usize,
    /// Terminal area of the last drawn frame, for mouse hit-testing
    pub viewport: Rect,

    // Data
    pub load_state: LoadState,
    pub catalog: Catalog,
    pub session: SessionState,
    /// Set once any selection has been attempted, so the results panel can
    /// tell "nothing searched yet" from "not found"
    pub lookup_attempted: bool,

    // Background task channel
    load_rx: mpsc::Receiver<LoadResult>,
    load_tx: mpsc::Sender<LoadResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Self {
            config,

            state: AppState::Normal,
            focus: Focus::Search,
            search: SearchBox::new(),
            results_scroll: 0,
            viewport: Rect::default(),

            load_state: LoadState::Loading,
            catalog: Catalog::default(),
            session: SessionState::new(),
            lookup_attempted: false,

            load_rx: rx,
            load_tx: tx,

            status_message: None,
        }
    }

    // =========================================================================
    // Background Data Load
    // =========================================================================

    /// Spawn a background task that loads both documents.
    pub fn start_loading(&mut self) {
        let roster = self.config.roster();
        let trips = self.config.trips();
        let tx = self.load_tx.clone();

        info!(%roster, %trips, "Starting background load");
        self.load_state = LoadState::Loading;
        self.status_message = Some("Loading data...".to_string());

        tokio::spawn(async move {
            let result = match SourceClient::new() {
                Ok(client) => match load_catalog(&client, &roster, &trips).await {
                    Ok(catalog) => LoadResult::Loaded(catalog),
                    Err(e) => LoadResult::Failed(e.to_string()),
                },
                Err(e) => LoadResult::Failed(e.to_string()),
            };

            if let Err(e) = tx.send(result).await {
                error!(error = %e, "Failed to send load result - channel closed");
            }
        });
    }

    /// Check for a completed load and apply it
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.load_rx.try_recv() {
            self.process_load_result(result);
        }
    }

    fn process_load_result(&mut self, result: LoadResult) {
        match result {
            LoadResult::Loaded(catalog) => {
                self.status_message = None;
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
                // Text typed while loading becomes searchable now
                if self.search.focused {
                    self.search.focus(self.catalog.roster());
                }
            }
            LoadResult::Failed(detail) => {
                error!(error = %detail, "Catalog load failed");
                self.status_message = None;
                self.load_state = LoadState::Failed;
            }
        }
    }

    // =========================================================================
    // Search Box
    // =========================================================================

    pub fn search_phase(&self) -> SearchPhase {
        if self.search.list_visible() {
            SearchPhase::Suggesting
        } else if self.session.current().is_some() {
            SearchPhase::Selected
        } else {
            SearchPhase::Idle
        }
    }

    pub fn suggestions(&self) -> Vec<&Student> {
        self.search.suggestions(searchable(self.load_state, &self.catalog))
    }

    pub fn type_char(&mut self, c: char) {
        let roster = searchable(self.load_state, &self.catalog);
        self.search.push_char(c, roster);
    }

    pub fn backspace(&mut self) {
        let roster = searchable(self.load_state, &self.catalog);
        self.search.pop_char(roster);
    }

    pub fn focus_search(&mut self) {
        let roster = searchable(self.load_state, &self.catalog);
        self.focus = Focus::Search;
        self.search.focus(roster);
    }

    pub fn focus_results(&mut self) {
        self.focus = Focus::Results;
        self.search.blur(Instant::now());
    }

    /// Activate a suggestion row, making that student current.
    pub fn activate_suggestion(&mut self, index: usize) {
        let roster = searchable(self.load_state, &self.catalog);
        let Some(student) = self.search.activate(index, roster) else {
            return;
        };
        let name = student.name.clone();
        self.select_by_name(&name);
    }

    /// Enter in the search box: the highlighted row, or an exact name lookup.
    pub fn submit_search(&mut self) {
        if self.load_state != LoadState::Ready {
            return;
        }
        match self.search.highlight() {
            Some(index) => self.activate_suggestion(index),
            None => {
                let name = self.search.query.trim().to_string();
                if !name.is_empty() {
                    self.select_by_name(&name);
                }
            }
        }
    }

    fn select_by_name(&mut self, name: &str) {
        self.lookup_attempted = true;
        self.results_scroll = 0;
        if self.session.select_by_name(&self.catalog, name).is_none() {
            debug!(name, "Selection not found");
        }
    }

    /// Event loop tick: expire the blur grace delay.
    pub fn tick(&mut self, now: Instant) {
        self.search.tick(now);
    }

    // =========================================================================
    // Results Panel
    // =========================================================================

    /// Progress for the current selection, `None` before any lookup.
    pub fn progress(&self) -> Option<ProgressView> {
        if self.load_state != LoadState::Ready || !self.lookup_attempted {
            return None;
        }
        Some(self.session.view(&self.catalog))
    }

    pub fn scroll_results_down(&mut self, amount: usize) {
        let max = self.catalog.trip_count().saturating_sub(1);
        self.results_scroll = (self.results_scroll + amount).min(max);
    }

    pub fn scroll_results_up(&mut self, amount: usize) {
        self.results_scroll = self.results_scroll.saturating_sub(amount);
    }

    /// Status bar summary of what was loaded
    pub fn load_summary(&self) -> String {
        match self.load_state {
            LoadState::Loading => "Loading...".to_string(),
            LoadState::Failed => "Load failed".to_string(),
            LoadState::Ready => format!(
                "{} students, {} field trips",
                self.catalog.roster().len(),
                self.catalog.trip_count()
            ),
        }
    }
}

/// Roster visible to search; empty until the catalog has loaded
fn searchable(load_state: LoadState, catalog: &Catalog) -> &[Student] {
    match load_state {
        LoadState::Ready => catalog.roster(),
        LoadState::Loading | LoadState::Failed => &[],
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fieldtrip_core::FieldTrip;

    fn ready_app() -> App {
        let mut app = App::new(Config::default());
        let catalog = Catalog::new(
            vec![
                Student::new("Jane Smith", "6"),
                Student::new("Janet Lee", "7"),
            ],
            vec![
                (
                    "zoo".to_string(),
                    FieldTrip {
                        name: "City Zoo".to_string(),
                        date: "2024-09-12".to_string(),
                        teacher: "Mr. Park".to_string(),
                        students: vec!["Smith, Jane '27".to_string()],
                    },
                ),
                (
                    "farm".to_string(),
                    FieldTrip {
                        name: "Farm".to_string(),
                        date: "2024-10-01".to_string(),
                        teacher: "Ms. Rivera".to_string(),
                        students: vec![],
                    },
                ),
            ],
        );
        app.process_load_result(LoadResult::Loaded(catalog));
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.type_char(c);
        }
    }

    #[test]
    fn test_search_unusable_while_loading() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "jan");
        assert_eq!(app.search_phase(), SearchPhase::Idle);
        assert!(app.suggestions().is_empty());
    }

    #[test]
    fn test_query_typed_while_loading_suggests_after_load() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "jan");
        app.process_load_result(LoadResult::Loaded(Catalog::new(
            vec![Student::new("Jane Smith", "6")],
            vec![],
        )));
        assert_eq!(app.search_phase(), SearchPhase::Suggesting);
    }

    #[test]
    fn test_phases_idle_suggesting_selected() {
        let mut app = ready_app();
        assert_eq!(app.search_phase(), SearchPhase::Idle);

        type_str(&mut app, "ja");
        assert_eq!(app.search_phase(), SearchPhase::Suggesting);
        assert_eq!(app.suggestions().len(), 2);

        app.activate_suggestion(0);
        assert_eq!(app.search_phase(), SearchPhase::Selected);
        assert_eq!(app.search.query, "Jane Smith");

        match app.progress() {
            Some(ProgressView::Report(report)) => {
                assert_eq!(report.completed_count, 1);
                assert_eq!(report.percent, 50);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_submit_with_highlight_selects_row() {
        let mut app = ready_app();
        type_str(&mut app, "jan");
        let count = app.suggestions().len();
        app.search.move_highlight_down(count);
        app.search.move_highlight_down(count);
        app.submit_search();
        assert_eq!(app.session.current().map(|s| s.name.as_str()), Some("Janet Lee"));
    }

    #[test]
    fn test_submit_unknown_name_shows_not_found() {
        let mut app = ready_app();
        assert!(app.progress().is_none());
        type_str(&mut app, "Nobody");
        app.submit_search();
        assert_eq!(app.progress(), Some(ProgressView::NotFound));
        assert!(app.session.current().is_none());
    }

    #[test]
    fn test_failed_load() {
        let mut app = App::new(Config::default());
        app.process_load_result(LoadResult::Failed("boom".to_string()));
        assert_eq!(app.load_state, LoadState::Failed);
        assert!(app.progress().is_none());
        assert_eq!(app.load_summary(), "Load failed");
    }

    #[test]
    fn test_results_scroll_is_clamped() {
        let mut app = ready_app();
        app.scroll_results_down(PAGE_SCROLL_SIZE);
        assert_eq!(app.results_scroll, 1);
        app.scroll_results_up(PAGE_SCROLL_SIZE);
        assert_eq!(app.results_scroll, 0);
    }
}
