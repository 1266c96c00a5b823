//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod mouse;

pub use action::{
    activate_row, click_path, click_row, handle_action, ActionResult, ClickOutcome,
};
pub use key::{handle_key_event, KeyAction};
pub use mouse::{handle_mouse_event, MouseAction};
