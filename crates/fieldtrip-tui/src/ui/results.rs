//! Results panel: load status, placeholders, or the selected student's
//! progress summary and trip list.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

use fieldtrip_core::loader::LOAD_FAILURE_MESSAGE;
use fieldtrip_core::progress::{NOT_FOUND_HINT, NOT_FOUND_TITLE};
use fieldtrip_core::{ProgressReport, ProgressView};

use crate::app::{App, Focus, LoadState, SearchPhase};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(" Field Trips Progress ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    match app.load_state {
        LoadState::Loading => {
            render_message(frame, block, area, "Loading data...", styles::muted_style(), None);
        }
        LoadState::Failed => {
            render_message(
                frame,
                block,
                area,
                "Error",
                styles::error_style(),
                Some(LOAD_FAILURE_MESSAGE),
            );
        }
        LoadState::Ready => match app.progress() {
            None => render_message(
                frame,
                block,
                area,
                "Find a student",
                styles::title_style(),
                Some(intro_hint(app.search_phase())),
            ),
            Some(ProgressView::NotFound) => {
                render_message(
                    frame,
                    block,
                    area,
                    NOT_FOUND_TITLE,
                    styles::title_style(),
                    Some(NOT_FOUND_HINT),
                );
            }
            Some(ProgressView::Report(report)) => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                render_report(frame, app, &report, inner);
            }
        },
    }
}

/// Placeholder hint before the first lookup
fn intro_hint(phase: SearchPhase) -> &'static str {
    match phase {
        SearchPhase::Suggesting => "Pick a student from the list, or press Enter for an exact name",
        SearchPhase::Idle | SearchPhase::Selected => "Type at least 2 letters of a name to search",
    }
}

/// Centered empty-state message
fn render_message(
    frame: &mut Frame,
    block: Block,
    area: Rect,
    title: &str,
    title_style: Style,
    detail: Option<&str>,
) {
    let mut lines = vec![Line::from(""), Line::from(Span::styled(title.to_string(), title_style))];
    if let Some(detail) = detail {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(detail.to_string(), styles::muted_style())));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_report(frame: &mut Frame, app: &App, report: &ProgressReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Student header
            Constraint::Length(3), // Summary numbers
            Constraint::Length(2), // Progress gauge
            Constraint::Min(3),    // Trip list
        ])
        .split(area);

    render_student_header(frame, report, chunks[0]);
    render_summary(frame, report, chunks[1]);
    render_gauge(frame, report, chunks[2]);
    render_trip_table(frame, app, report, chunks[3]);
}

fn render_student_header(frame: &mut Frame, report: &ProgressReport, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(report.student.name.clone(), styles::title_style())),
        Line::from(Span::styled(report.student.grade_label(), styles::highlight_style())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_summary(frame: &mut Frame, report: &ProgressReport, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let items = [
        (report.completed_count.to_string(), "Completed"),
        (report.remaining.to_string(), "Remaining"),
        (format!("{}%", report.percent), "Progress"),
    ];

    for ((number, label), column) in items.into_iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(number, styles::summary_number_style())),
            Line::from(Span::styled(label, styles::muted_style())),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, *column);
    }
}

fn render_gauge(frame: &mut Frame, report: &ProgressReport, area: Rect) {
    let gauge_area = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let gauge = Gauge::default()
        .gauge_style(styles::success_style())
        .percent(report.percent.min(100) as u16)
        .label(format!(
            "{} of {} trips",
            report.completed_count, report.total_count
        ));
    frame.render_widget(gauge, gauge_area);
}

fn render_trip_table(frame: &mut Frame, app: &App, report: &ProgressReport, area: Rect) {
    if report.per_trip.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No field trips loaded",
            styles::muted_style(),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Trip"),
        Cell::from("Date • Teacher"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = report
        .per_trip
        .iter()
        .map(|trip| {
            Row::new(vec![
                Cell::from(trip.name.clone()),
                Cell::from(Span::styled(trip.subtitle(), styles::muted_style())),
                Cell::from(Span::styled(
                    trip.status_label(),
                    styles::status_badge_style(trip.attended),
                )),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths).header(header);

    let mut state = TableState::default().with_offset(app.results_scroll);
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_hint_follows_search_phase() {
        assert!(intro_hint(SearchPhase::Suggesting).starts_with("Pick a student"));
        assert!(intro_hint(SearchPhase::Idle).starts_with("Type at least 2"));
    }
}
