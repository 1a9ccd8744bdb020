use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use fieldtrip_core::utils::truncate_string;

use crate::app::{App, AppState, Focus, SearchPhase};

use super::layout::{suggestion_offset, AppLayout, MAX_VISIBLE_SUGGESTIONS};
use super::{results, styles};

pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_title_bar(frame, layout.title);
    render_search_box(frame, app, layout.search);
    results::render(frame, app, layout.results);
    render_status_bar(frame, app, layout.status);

    // Dropdown draws over the results panel
    render_suggestions(frame, app, &layout);

    match app.state {
        AppState::ShowingHelp => render_help_overlay(frame),
        AppState::ConfirmingQuit => render_quit_overlay(frame),
        AppState::Normal | AppState::Quitting => {}
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let [name_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(area);
    let underline = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(
        Paragraph::new(Span::styled("  Field Trip Tracker", styles::title_style()))
            .block(underline.clone()),
        name_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("[F1] Help", styles::muted_style()))
            .alignment(Alignment::Right)
            .block(underline),
        hint_area,
    );
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;

    let line = if app.search.query.is_empty() && !focused {
        Line::from(Span::styled(
            "Press / to search for a student",
            styles::muted_style(),
        ))
    } else {
        let cursor = if focused { "▌" } else { "" };
        Line::from(vec![
            Span::styled(app.search.query.clone(), styles::search_style()),
            Span::styled(cursor, styles::search_style()),
        ])
    };

    let block = Block::default()
        .title(" Search students ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_suggestions(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let suggestions = app.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let area = layout.suggestions(suggestions.len());
    let offset = suggestion_offset(app.search.highlight(), suggestions.len());
    let name_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|(i, student)| {
            let badge = student.grade_label();
            let name = truncate_string(
                &student.name,
                name_width.saturating_sub(badge.chars().count() + 3),
            );
            let padding = name_width
                .saturating_sub(name.chars().count() + badge.chars().count() + 2);
            let style = if app.search.highlight() == Some(i) {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::raw(name),
                Span::raw(" ".repeat(padding)),
                Span::styled(badge, styles::muted_style()),
            ]))
            .style(style)
        })
        .collect();

    let title = format!(" {} matches ", suggestions.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(true)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app
        .status_message
        .clone()
        .unwrap_or_else(|| app.load_summary());
    let shortcuts = status_shortcuts(app.focus, app.search_phase());

    frame.render_widget(Block::default().style(styles::status_bar_style()), area);
    frame.render_widget(
        Paragraph::new(format!(" {summary}")).style(styles::muted_style()),
        area,
    );
    frame.render_widget(
        Paragraph::new(format!("{shortcuts} "))
            .style(styles::muted_style())
            .alignment(Alignment::Right),
        area,
    );
}

/// Key hints for the status bar, following focus and the search phase
fn status_shortcuts(focus: Focus, phase: SearchPhase) -> &'static str {
    match (focus, phase) {
        (Focus::Search, SearchPhase::Suggesting) => "[↑↓] pick  [Enter] select  [Esc] close",
        (Focus::Search, SearchPhase::Idle) => "[Enter] look up  [Tab] results",
        (Focus::Search, SearchPhase::Selected) => "type to search again  [Tab] results",
        (Focus::Results, SearchPhase::Suggesting) => "[/] back to suggestions  [q]uit",
        (Focus::Results, _) => "[/] search  [↑↓] scroll  [q]uit",
    }
}

/// One "key  description" row of the help overlay
fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn help_heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(format!(" {text}"), styles::highlight_style()))
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 21, frame.area());

    let help_text = vec![
        Line::from(vec![
            Span::styled("  Field Trip Tracker ", styles::title_style()),
            Span::styled(concat!("v", env!("CARGO_PKG_VERSION")), styles::muted_style()),
        ]),
        Line::default(),
        help_heading("Search box"),
        help_line("type", "Filter students (2+ letters)"),
        help_line("↑/↓", "Move through suggestions"),
        help_line("Enter", "Select suggestion or exact name"),
        help_line("Tab/Esc", "Leave the search box"),
        Line::default(),
        help_heading("Results"),
        help_line("/ or Tab", "Back to the search box"),
        help_line("↑/↓ PgUp", "Scroll the trip list"),
        help_line("q", "Quit"),
        Line::default(),
        help_heading("Mouse"),
        help_line("click", "Pick a suggestion or change focus"),
        help_line("wheel", "Scroll the trip list"),
        Line::default(),
        Line::from(Span::styled(
            "       F1 or Esc closes this window",
            styles::muted_style(),
        )),
    ];

    render_popup(frame, area, help_text);
}

/// Clear `area` and draw `lines` inside a focused border
fn render_popup(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(true)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Rectangle of at most `width` x `height` centered in `r`
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 6, frame.area());

    let lines = vec![
        Line::default(),
        Line::from(Span::styled("   Quit Field Trip Tracker?", styles::highlight_style())),
        Line::default(),
        Line::from(vec![
            Span::styled("   [Y]", styles::help_key_style()),
            Span::styled("es  /  ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled("o", styles::muted_style()),
        ]),
    ];

    render_popup(frame, area, lines);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let outer = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(46, 10, outer), Rect::new(27, 15, 46, 10));
        // Clamped to a small terminal
        let small = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect_fixed(46, 10, small), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_status_shortcuts_follow_search_phase() {
        assert!(status_shortcuts(Focus::Search, SearchPhase::Suggesting).contains("pick"));
        assert!(status_shortcuts(Focus::Search, SearchPhase::Idle).contains("look up"));
        assert!(status_shortcuts(Focus::Search, SearchPhase::Selected).contains("search again"));
        assert!(status_shortcuts(Focus::Results, SearchPhase::Selected).contains("scroll"));
    }
}
