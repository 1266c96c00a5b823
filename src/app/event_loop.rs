//! Main event loop for the application

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::prelude::*;

use crate::app::Config;
use crate::core::{AppState, SelectedFile, SelectionSink, ViewMode};
use crate::handler::{
    activate_row, handle_action, handle_key_event, handle_mouse_event, ActionResult, MouseAction,
};
use crate::render::visible_height;
use crate::tree::TreeNavigator;

use super::render::{layout_areas, render_frame, RenderContext};

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
    /// Last file selected before exit
    pub selected: Option<SelectedFile>,
}

/// Initial state from configuration
fn initial_state(config: &Config) -> AppState {
    let mut state = AppState::new();
    state.pick_mode = config.pick_mode;
    state.icons_enabled = config.icons_enabled;
    state.indent_width = config.indent_width;
    state.show_status_bar = config.show_status_bar;
    state
}

/// Build the navigator for the configured path list
pub fn build_navigator(config: &Config) -> TreeNavigator {
    let mut navigator = TreeNavigator::new(config.files.iter(), config.filter.clone());
    if config.expand_all {
        navigator.expand_all();
    }
    tracing::info!(
        source = %config.source_label,
        paths = config.files.len(),
        roots = navigator.roots().len(),
        "tree built"
    );
    navigator
}

/// Apply one terminal event.
///
/// `tree_height` is the number of rows the tree can show; clicks below
/// it land on the status bar and are ignored.
pub fn handle_event(
    event: Event,
    navigator: &mut TreeNavigator,
    state: &mut AppState,
    sink: &mut impl SelectionSink,
    tree_height: usize,
) -> ActionResult {
    match event {
        Event::Key(key) => {
            let action = handle_key_event(state, key);
            state.clear_message();
            handle_action(action, navigator, state, sink)
        }
        Event::Mouse(mouse) => {
            if state.mode == ViewMode::Help {
                return ActionResult::Continue;
            }
            // Tree block starts at the top of the screen
            match handle_mouse_event(mouse, 0) {
                MouseAction::Click { row } if (row as usize) < tree_height => {
                    let index = state.viewport_top + row as usize;
                    activate_row(navigator, state, index, sink)
                }
                MouseAction::ScrollUp(amount) => {
                    state.scroll_by(-(amount as isize), navigator.visible_count());
                    ActionResult::Continue
                }
                MouseAction::ScrollDown(amount) => {
                    state.scroll_by(amount as isize, navigator.visible_count());
                    ActionResult::Continue
                }
                MouseAction::Click { .. } | MouseAction::None => ActionResult::Continue,
            }
        }
        _ => ActionResult::Continue,
    }
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = initial_state(&config);
    let mut navigator = build_navigator(&config);

    let mut callback = config.callback.take();
    let mut sink = |selected: &SelectedFile| {
        tracing::info!(path = %selected.path, "file selected");
        if let Some(cb) = callback.as_mut() {
            cb.on_file_selected(selected);
        }
    };

    loop {
        state.clamp_focus(navigator.visible_count());

        // Adjust viewport before rendering
        let size = terminal.size()?;
        let (tree_area, _) = layout_areas(
            Rect::new(0, 0, size.width, size.height),
            state.show_status_bar,
        );
        let tree_height = visible_height(tree_area);
        state.adjust_viewport(tree_height);

        {
            let rows = navigator.visible_entries();
            let render_context = RenderContext {
                state: &state,
                rows: &rows,
                title: &config.source_label,
            };
            terminal.draw(|frame| render_frame(frame, render_context))?;
        }

        // 60ms timeout balances responsiveness and CPU usage
        if !event::poll(Duration::from_millis(60))? {
            continue;
        }

        let event = event::read()?;
        if let ActionResult::Quit(code) =
            handle_event(event, &mut navigator, &mut state, &mut sink, tree_height)
        {
            tracing::info!(exit_code = code, "quitting");
            return Ok(AppResult {
                exit_code: code,
                selected: state.selected.take(),
            });
        }
    }
}
