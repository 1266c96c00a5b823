//! Core module - Application state, view modes and selection publishing

pub mod mode;
pub mod selection;
pub mod state;

pub use mode::ViewMode;
pub use selection::{SelectedFile, SelectionLog, SelectionSink};
pub use state::AppState;
