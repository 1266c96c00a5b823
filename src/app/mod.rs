//! Application module
//!
//! Configuration, logging, and the interactive event loop.

mod config;
mod config_file;
mod event_loop;
mod logging;
mod render;

pub use config::{read_path_lines, CliArgs, Config};
pub use config_file::ConfigFile;
pub use event_loop::{build_navigator, handle_event, run_app, AppResult};
pub use logging::{init_file_logging, LOG_ENV};
pub use render::{layout_areas, render_frame, RenderContext};
