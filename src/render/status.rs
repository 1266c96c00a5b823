//! Status bar and help popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::icons::Icon;
use crate::core::{AppState, ViewMode};

/// Height of the status bar, borders included
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Text of the status bar: message (or selection, or hint) and row count
pub fn status_text(state: &AppState, total_rows: usize) -> (String, String) {
    let left = match (&state.message, &state.selected) {
        (Some(msg), _) => msg.clone(),
        (None, Some(selected)) => selected.path.clone(),
        (None, None) => "? for help".to_string(),
    };
    let right = format!("{} rows", total_rows);
    (left, right)
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, total_rows: usize, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let (left, right) = status_text(state, total_rows);

    let selection_marker = match &state.selected {
        Some(_) if state.icons_enabled => Icon::File.glyph(),
        _ => "",
    };
    let left_content = Line::from(vec![
        Span::styled(selection_marker, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", left)),
    ]);
    let msg_widget = Paragraph::new(left_content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    let pick_info = if state.pick_mode { "PICK | " } else { "" };
    let stats_widget = Paragraph::new(format!(" {}{}", pick_info, right))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats_widget, chunks[1]);
}

/// Calculate centered rect for popup
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render help popup
pub fn render_help_popup(frame: &mut Frame, state: &AppState) {
    if state.mode != ViewMode::Help {
        return;
    }

    let heading = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_lines = vec![
        heading("Navigation"),
        Line::from("  j/\u{2193}      Move down"),
        Line::from("  k/\u{2191}      Move up"),
        Line::from("  g        Go to top"),
        Line::from("  G        Go to bottom"),
        Line::from(""),
        heading("Tree"),
        Line::from("  Enter    Open folder / select file"),
        Line::from("  l/\u{2192}      Open folder / select file"),
        Line::from("  h/\u{2190}      Collapse / go to parent"),
        Line::from("  H        Collapse all"),
        Line::from("  L        Expand all"),
        Line::from("  Click    Same as Enter"),
        Line::from(""),
        heading("Other"),
        Line::from("  ?        Toggle this help"),
        Line::from("  q/Esc    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let height = (help_lines.len() + 2) as u16; // +2 for border
    let area = centered_rect(50, height, frame.area());

    let popup = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
