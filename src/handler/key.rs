//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{AppState, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application (cancel in pick mode)
    Quit,
    /// Move focus up
    MoveUp,
    /// Move focus down
    MoveDown,
    /// Move to top
    MoveToTop,
    /// Move to bottom
    MoveToBottom,
    /// Click the focused row
    Activate,
    /// Collapse the focused directory or jump to its parent
    Collapse,
    /// Collapse all directories
    CollapseAll,
    /// Expand all directories
    ExpandAll,
    /// Show or hide the help popup
    ToggleHelp,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    match state.mode {
        ViewMode::Browse => handle_browse_mode(key),
        ViewMode::Help => handle_help_mode(key),
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

        KeyCode::Char('k') | KeyCode::Up => KeyAction::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => KeyAction::MoveDown,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::MoveToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::MoveToBottom,

        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
            KeyAction::Activate
        }
        KeyCode::Char('h') | KeyCode::Left => KeyAction::Collapse,
        KeyCode::Char('H') => KeyAction::CollapseAll,
        KeyCode::Char('L') => KeyAction::ExpandAll,

        KeyCode::Char('?') => KeyAction::ToggleHelp,
        _ => KeyAction::None,
    }
}

/// Any key closes help; `q` still quits
fn handle_help_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::ToggleHelp,
    }
}
