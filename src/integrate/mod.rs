//! Integrate module - External integration features
//!
//! Provides integration with external tools:
//! - Pick mode: Use filetree as a file picker (--pick)
//! - Callback: Run commands on file selection (--on-select)
//! - Tree mode: Print the tree to stdout (--tree)

pub mod callback;
pub mod pick;
pub mod tree;

pub use callback::{Callback, CallbackResult};
pub use pick::{exit_code, output_selection, write_selection, OutputFormat};
pub use tree::{output_tree, print_tree, TreeOutputOptions};
