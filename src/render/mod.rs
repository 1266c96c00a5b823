//! Render module - UI rendering

pub mod icons;
pub mod status;
pub mod tree;

pub use icons::{file_icon, folder_icon, node_icon, Icon};
pub use status::{render_help_popup, render_status_bar, STATUS_BAR_HEIGHT};
pub use tree::{format_row, render_tree, visible_height};
