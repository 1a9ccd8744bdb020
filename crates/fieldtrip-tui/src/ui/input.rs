//! Keyboard and mouse input handling for the TUI.
//!
//! This module translates terminal events into application state changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::{App, AppState, Focus, PAGE_SCROLL_SIZE};
use crate::ui::layout::{suggestion_at, suggestion_offset, AppLayout};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    if key.code == KeyCode::F(1) {
        app.state = AppState::ShowingHelp;
        return false;
    }

    match app.focus {
        Focus::Search => handle_search_input(app, key),
        Focus::Results => handle_results_input(app, key),
    }
    false
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
            app.focus_results();
        }
        KeyCode::Enter => {
            app.submit_search();
        }
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Down => {
            let count = app.suggestions().len();
            app.search.move_highlight_down(count);
        }
        KeyCode::Up => {
            app.search.move_highlight_up();
        }
        KeyCode::Char(c) => {
            // Control chords are commands, not text
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                app.type_char(c);
            }
        }
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab => {
            app.focus_search();
        }
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down(1);
        }
        KeyCode::PageUp => {
            app.scroll_results_up(PAGE_SCROLL_SIZE);
        }
        KeyCode::PageDown => {
            app.scroll_results_down(PAGE_SCROLL_SIZE);
        }
        KeyCode::Home => {
            app.results_scroll = 0;
        }
        _ => {}
    }
}

/// Handle mouse input: clicks pick suggestions or move focus, the wheel
/// scrolls the trip list.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(app.state, AppState::Normal) {
        return;
    }

    let layout = AppLayout::new(app.viewport);
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let count = app.suggestions().len();
            if count > 0 {
                let area = layout.suggestions(count);
                let offset = suggestion_offset(app.search.highlight(), count);
                if let Some(index) = suggestion_at(area, offset, count, mouse.column, mouse.row) {
                    app.activate_suggestion(index);
                    return;
                }
            }

            if layout.search.contains(position) {
                app.focus_search();
            } else if app.focus == Focus::Search {
                app.focus_results();
            }
        }
        MouseEventKind::ScrollDown if layout.results.contains(position) => {
            app.scroll_results_down(1);
        }
        MouseEventKind::ScrollUp if layout.results.contains(position) => {
            app.scroll_results_up(1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldtrip_core::{Catalog, Config, Student};
    use ratatui::layout::Rect;

    use crate::app::LoadState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn ready_app() -> App {
        let mut app = App::new(Config::default());
        app.catalog = Catalog::new(
            vec![
                Student::new("Jane Smith", "6"),
                Student::new("Janet Lee", "7"),
            ],
            vec![],
        );
        app.load_state = LoadState::Ready;
        app.viewport = Rect::new(0, 0, 80, 30);
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_input(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_enter_selects_highlight() {
        let mut app = ready_app();
        type_str(&mut app, "jan");
        handle_input(&mut app, key(KeyCode::Down));
        handle_input(&mut app, key(KeyCode::Enter));
        assert_eq!(app.session.current().map(|s| s.name.as_str()), Some("Jane Smith"));
        assert!(!app.search.list_visible());
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut app = ready_app();
        handle_input(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.search.query.is_empty());
    }

    #[test]
    fn test_tab_moves_focus_and_back() {
        let mut app = ready_app();
        type_str(&mut app, "jan");
        handle_input(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Results);
        // Still visible during the grace delay
        assert!(app.search.list_visible());

        handle_input(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.focus, Focus::Search);
        assert!(app.search.list_visible());
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = ready_app();
        handle_input(&mut app, key(KeyCode::Esc));
        assert!(!handle_input(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.state, AppState::ConfirmingQuit);
        assert!(handle_input(&mut app, key(KeyCode::Char('y'))));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_q_in_search_box_is_text() {
        let mut app = ready_app();
        handle_input(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.search.query, "q");
    }

    #[test]
    fn test_help_toggle() {
        let mut app = ready_app();
        handle_input(&mut app, key(KeyCode::F(1)));
        assert_eq!(app.state, AppState::ShowingHelp);
        handle_input(&mut app, key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Normal);
    }

    #[test]
    fn test_click_on_suggestion_selects() {
        let mut app = ready_app();
        type_str(&mut app, "jan");
        let layout = AppLayout::new(app.viewport);
        let area = layout.suggestions(2);

        handle_mouse(&mut app, click(area.x + 3, area.y + 2));
        assert_eq!(app.session.current().map(|s| s.name.as_str()), Some("Janet Lee"));
        assert_eq!(app.search.query, "Janet Lee");
    }

    #[test]
    fn test_click_outside_blurs_and_click_on_box_focuses() {
        let mut app = ready_app();
        let layout = AppLayout::new(app.viewport);

        handle_mouse(&mut app, click(1, layout.results.y + layout.results.height - 1));
        assert_eq!(app.focus, Focus::Results);

        handle_mouse(&mut app, click(layout.search.x + 2, layout.search.y + 1));
        assert_eq!(app.focus, Focus::Search);
    }
}
