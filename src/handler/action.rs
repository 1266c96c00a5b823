//! Action execution: clicks and key actions applied to the tree and state

use crate::core::{AppState, SelectedFile, SelectionSink};
use crate::integrate::exit_code;
use crate::tree::TreeNavigator;

use super::KeyAction;

/// What a click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A directory was opened or closed
    Toggled { path: String, expanded: bool },
    /// A file was published to the selection sink
    Selected(SelectedFile),
    /// Nothing under the click
    Missed,
}

/// Result of handling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Keep running
    Continue,
    /// Exit with the given code
    Quit(i32),
}

/// Click the node at `path`.
///
/// Directories toggle their own expansion flag and nothing else. Files are
/// published to `sink` and leave every expansion flag untouched. A node that
/// was built as a leaf is treated as a file even if it has children.
pub fn click_path(
    navigator: &mut TreeNavigator,
    path: &str,
    sink: &mut impl SelectionSink,
) -> ClickOutcome {
    let Some(is_dir) = navigator.find(path).map(|n| n.is_dir) else {
        return ClickOutcome::Missed;
    };

    if is_dir {
        let expanded = navigator.toggle_expand(path).unwrap_or(false);
        tracing::debug!(path, expanded, "toggled directory");
        ClickOutcome::Toggled {
            path: path.to_string(),
            expanded,
        }
    } else {
        let selected = SelectedFile::new(path);
        sink.on_file_selected(&selected);
        ClickOutcome::Selected(selected)
    }
}

/// Click the visible row at `index`
pub fn click_row(
    navigator: &mut TreeNavigator,
    index: usize,
    sink: &mut impl SelectionSink,
) -> ClickOutcome {
    let path = navigator
        .visible_entries()
        .get(index)
        .map(|row| row.node.path.clone());

    match path {
        Some(path) => click_path(navigator, &path, sink),
        None => ClickOutcome::Missed,
    }
}

/// Click a row, keeping focus and pick-mode bookkeeping in `state`
pub fn activate_row(
    navigator: &mut TreeNavigator,
    state: &mut AppState,
    index: usize,
    sink: &mut impl SelectionSink,
) -> ActionResult {
    let outcome = click_row(navigator, index, sink);
    if outcome != ClickOutcome::Missed {
        state.focus_index = index;
    }

    match outcome {
        ClickOutcome::Selected(selected) => {
            state.set_message(format!("Selected {}", selected.path));
            state.selected = Some(selected);
            if state.pick_mode {
                state.should_quit = true;
                return ActionResult::Quit(exit_code::SUCCESS);
            }
            ActionResult::Continue
        }
        ClickOutcome::Toggled { .. } | ClickOutcome::Missed => ActionResult::Continue,
    }
}

/// Parent path of a slash-joined path, `None` at the root
fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|i| &path[..i])
}

/// Execute a key action
pub fn handle_action(
    action: KeyAction,
    navigator: &mut TreeNavigator,
    state: &mut AppState,
    sink: &mut impl SelectionSink,
) -> ActionResult {
    let total = navigator.visible_count();

    match action {
        KeyAction::None => {}
        KeyAction::Quit => {
            state.should_quit = true;
            let code = if state.pick_mode && state.selected.is_none() {
                exit_code::CANCELLED
            } else {
                exit_code::SUCCESS
            };
            return ActionResult::Quit(code);
        }
        KeyAction::MoveUp => {
            state.focus_index = state.focus_index.saturating_sub(1);
        }
        KeyAction::MoveDown => {
            if state.focus_index + 1 < total {
                state.focus_index += 1;
            }
        }
        KeyAction::MoveToTop => state.focus_index = 0,
        KeyAction::MoveToBottom => state.focus_index = total.saturating_sub(1),
        KeyAction::Activate => {
            let index = state.focus_index;
            return activate_row(navigator, state, index, sink);
        }
        KeyAction::Collapse => collapse_or_parent(navigator, state),
        KeyAction::CollapseAll => {
            navigator.collapse_all();
            state.focus_index = 0;
        }
        KeyAction::ExpandAll => navigator.expand_all(),
        KeyAction::ToggleHelp => state.mode = state.mode.toggle_help(),
    }

    state.clamp_focus(navigator.visible_count());
    ActionResult::Continue
}

/// Collapse the focused directory; if it is already closed (or a file),
/// move focus to its parent row instead
fn collapse_or_parent(navigator: &mut TreeNavigator, state: &mut AppState) {
    let focused = navigator
        .visible_entries()
        .get(state.focus_index)
        .map(|row| (row.node.path.clone(), row.expanded));

    let Some((path, expanded)) = focused else {
        return;
    };

    if expanded {
        navigator.collapse(&path);
        return;
    }

    if let Some(parent) = parent_path(&path) {
        if let Some(index) = navigator
            .visible_entries()
            .iter()
            .position(|row| row.node.path == parent)
        {
            state.focus_index = index;
        }
    }
}
