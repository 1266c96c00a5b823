//! Application state management

use super::{SelectedFile, ViewMode};

/// Main application state
pub struct AppState {
    /// Current focus index in visible rows
    pub focus_index: usize,
    /// Top of viewport (scroll position)
    pub viewport_top: usize,
    /// Last file published by a click
    pub selected: Option<SelectedFile>,
    /// Current view mode
    pub mode: ViewMode,
    /// Status message
    pub message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
    /// Pick mode (--pick option)
    pub pick_mode: bool,
    /// Whether to show Nerd Fonts icons
    pub icons_enabled: bool,
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Whether to draw the status bar
    pub show_status_bar: bool,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            focus_index: 0,
            viewport_top: 0,
            selected: None,
            mode: ViewMode::Browse,
            message: None,
            should_quit: false,
            pick_mode: false,
            icons_enabled: true,
            indent_width: 2,
            show_status_bar: true,
        }
    }

    /// Adjust viewport to keep focus visible
    pub fn adjust_viewport(&mut self, visible_height: usize) {
        if self.focus_index < self.viewport_top {
            self.viewport_top = self.focus_index;
        } else if self.focus_index >= self.viewport_top + visible_height {
            self.viewport_top = self.focus_index.saturating_sub(visible_height) + 1;
        }
    }

    /// Keep focus inside `0..total`
    pub fn clamp_focus(&mut self, total: usize) {
        if total == 0 {
            self.focus_index = 0;
        } else if self.focus_index >= total {
            self.focus_index = total - 1;
        }
    }

    /// Scroll by moving focus, stopping at the first and last row
    pub fn scroll_by(&mut self, delta: isize, total: usize) {
        let last = total.saturating_sub(1);
        self.focus_index = self.focus_index.saturating_add_signed(delta).min(last);
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
