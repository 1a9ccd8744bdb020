//! Colors and text styles for the tracker.

use ratatui::style::{Color, Modifier, Style};

// Palette
pub const BRAND: Color = Color::Rgb(70, 130, 180);
pub const ATTENDED: Color = Color::Rgb(80, 170, 110);
pub const MISSED: Color = Color::Rgb(200, 80, 70);
pub const GOLD: Color = Color::Rgb(210, 170, 70);
pub const DIM: Color = Color::Rgb(125, 125, 135);
const ROW_HIGHLIGHT: Color = Color::Rgb(45, 50, 70);
const STATUS_BAR_BG: Color = Color::Rgb(28, 30, 40);
const TEXT: Color = Color::White;

pub fn title_style() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

pub fn muted_style() -> Style {
    Style::default().fg(DIM)
}

/// Section headings and prompts
pub fn highlight_style() -> Style {
    Style::default().fg(GOLD)
}

pub fn success_style() -> Style {
    Style::default().fg(ATTENDED)
}

pub fn error_style() -> Style {
    Style::default().fg(MISSED)
}

pub fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { BRAND } else { DIM })
}

/// Highlighted row in the suggestion list
pub fn selected_style() -> Style {
    Style::default().bg(ROW_HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(TEXT)
}

/// Query text in the search box
pub fn search_style() -> Style {
    highlight_style()
}

pub fn status_bar_style() -> Style {
    Style::default().bg(STATUS_BAR_BG).fg(TEXT)
}

pub fn help_key_style() -> Style {
    highlight_style().add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    list_item_style()
}

/// Big numbers in the progress summary
pub fn summary_number_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Attended / not-attended badge
pub fn status_badge_style(attended: bool) -> Style {
    if attended {
        success_style().add_modifier(Modifier::BOLD)
    } else {
        error_style()
    }
}
