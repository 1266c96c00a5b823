//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::AppState;
use crate::render::{render_help_popup, render_status_bar, render_tree, STATUS_BAR_HEIGHT};
use crate::tree::VisibleRow;

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub rows: &'a [VisibleRow<'a>],
    pub title: &'a str,
}

/// Split the screen into the tree area and an optional status bar area
pub fn layout_areas(size: Rect, show_status_bar: bool) -> (Rect, Option<Rect>) {
    if !show_status_bar {
        return (size, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(size);
    (chunks[0], Some(chunks[1]))
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let (tree_area, status_area) = layout_areas(frame.area(), ctx.state.show_status_bar);

    // Viewport adjustment is done in the event loop
    render_tree(frame, ctx.state, ctx.rows, ctx.title, tree_area);

    if let Some(area) = status_area {
        render_status_bar(frame, ctx.state, ctx.rows.len(), area);
    }

    render_help_popup(frame, ctx.state);
}
