//! ft - a collapsible file tree for path lists

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use filetree::app::{build_navigator, run_app, Config};
use filetree::integrate::{exit_code, output_selection, output_tree, TreeOutputOptions};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    // Handle non-interactive mode first
    if config.tree_mode {
        return run_tree_mode(&config);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Run in tree output mode (non-interactive)
fn run_tree_mode(config: &Config) -> ExitCode {
    let navigator = build_navigator(config);
    let options = TreeOutputOptions {
        max_depth: config.tree_depth,
        icons: config.icons_enabled,
    };
    match output_tree(navigator.roots(), options) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mouse_enabled = config.mouse_enabled;
    let pick_mode = config.pick_mode;
    let output_format = config.output_format;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    // Print the pick once the screen is back to normal
    let app_result = result?;
    if pick_mode {
        if let Some(selected) = &app_result.selected {
            output_selection(selected, output_format)?;
        }
    }
    Ok(app_result.exit_code)
}
