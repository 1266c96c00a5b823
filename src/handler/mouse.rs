//! Mouse event handling

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Rows scrolled per wheel notch
const SCROLL_STEP: usize = 3;

/// Actions triggered by mouse events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    None,
    /// Left click on a row, relative to the first row drawn
    Click { row: u16 },
    ScrollUp(usize),
    ScrollDown(usize),
}

/// Process a mouse event and return the resulting action.
///
/// `tree_area_top` is the screen row of the tree block's top border.
pub fn handle_mouse_event(event: MouseEvent, tree_area_top: u16) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) if event.row > tree_area_top => {
            MouseAction::Click {
                row: event.row - tree_area_top - 1,
            }
        }
        MouseEventKind::ScrollUp => MouseAction::ScrollUp(SCROLL_STEP),
        MouseEventKind::ScrollDown => MouseAction::ScrollDown(SCROLL_STEP),
        _ => MouseAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn click_below_border_maps_to_row() {
        let action = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3), 0);
        assert_eq!(action, MouseAction::Click { row: 2 });
    }

    #[test]
    fn click_on_border_is_ignored() {
        let action = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 0), 0);
        assert_eq!(action, MouseAction::None);
    }

    #[test]
    fn right_click_is_ignored() {
        let action = handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 4), 0);
        assert_eq!(action, MouseAction::None);
    }

    #[test]
    fn scroll_wheel() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollUp, 2), 0),
            MouseAction::ScrollUp(3)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 2), 0),
            MouseAction::ScrollDown(3)
        );
    }
}
