//! Tree rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::icons::node_icon;
use crate::core::AppState;
use crate::tree::VisibleRow;

/// Render the file tree widget
pub fn render_tree(
    frame: &mut Frame,
    state: &AppState,
    rows: &[VisibleRow<'_>],
    title: &str,
    area: Rect,
) {
    let visible_height = visible_height(area);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(state.viewport_top)
        .take(visible_height)
        .enumerate()
        .map(|(i, row)| {
            let absolute_index = state.viewport_top + i;
            render_row(state, row, absolute_index)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title)),
    );

    frame.render_widget(list, area);
}

/// Plain text of a row: indent, icon, name
pub fn format_row(row: &VisibleRow<'_>, icons_enabled: bool, indent_width: usize) -> String {
    let indent = " ".repeat(row.depth * indent_width);
    let icon = node_icon(row.node, row.expanded).symbol(icons_enabled);
    format!("{}{} {}", indent, icon, row.node.name)
}

/// Render a single row as a ListItem
fn render_row(state: &AppState, row: &VisibleRow<'_>, index: usize) -> ListItem<'static> {
    let is_focused = index == state.focus_index;
    let is_selected = !row.node.is_dir
        && state
            .selected
            .as_ref()
            .is_some_and(|s| s.path == row.node.path);

    let mark_indicator = if is_selected { ">" } else { " " };

    let mut style = if row.node.is_dir {
        Style::default().fg(Color::Blue)
    } else if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    if is_focused {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(mark_indicator, Style::default().fg(Color::Yellow)),
        Span::styled(
            format_row(row, state.icons_enabled, state.indent_width),
            style,
        ),
    ]);

    ListItem::new(line)
}

/// Calculate visible height for the tree area
pub fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}
