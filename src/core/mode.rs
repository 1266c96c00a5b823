//! View mode definitions

/// Current view mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Normal browsing mode
    #[default]
    Browse,
    /// Key binding help popup
    Help,
}

impl ViewMode {
    /// Switch between browsing and the help popup
    pub fn toggle_help(self) -> Self {
        match self {
            ViewMode::Browse => ViewMode::Help,
            ViewMode::Help => ViewMode::Browse,
        }
    }
}
