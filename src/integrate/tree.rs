//! Tree output mode for CLI integration
//!
//! Prints the built tree to stdout with every directory expanded.

use std::io::{self, Write};

use crate::render::node_icon;
use crate::tree::{sort_nodes, TreeNode};

/// Options for tree printing
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOutputOptions {
    /// Maximum depth to print (None = unlimited)
    pub max_depth: Option<usize>,
    /// Prefix names with icon glyphs
    pub icons: bool,
}

/// Output a tree to stdout
pub fn output_tree(roots: &[TreeNode], options: TreeOutputOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    print_tree(&mut handle, roots, options)?;

    handle.flush()
}

/// Print a forest with box-drawing connectors
pub fn print_tree<W: Write>(
    out: &mut W,
    roots: &[TreeNode],
    options: TreeOutputOptions,
) -> io::Result<()> {
    print_tree_recursive(out, roots, "", 0, options)
}

/// Recursively print tree structure
fn print_tree_recursive<W: Write>(
    out: &mut W,
    nodes: &[TreeNode],
    prefix: &str,
    current_depth: usize,
    options: TreeOutputOptions,
) -> io::Result<()> {
    // Check depth limit
    if let Some(max) = options.max_depth {
        if current_depth >= max {
            return Ok(());
        }
    }

    let sorted = sort_nodes(nodes);
    let count = sorted.len();
    for (i, node) in sorted.into_iter().enumerate() {
        let is_last = i == count - 1;

        // Choose connector
        let connector = if is_last { "└── " } else { "├── " };

        let icon = if options.icons {
            format!("{} ", node_icon(node, true).glyph())
        } else {
            String::new()
        };

        // Print entry with trailing / for directories
        let suffix = if node.is_dir { "/" } else { "" };
        writeln!(out, "{}{}{}{}{}", prefix, connector, icon, node.name, suffix)?;

        if node.is_dir && node.has_children() {
            let new_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            print_tree_recursive(out, node.children(), &new_prefix, current_depth + 1, options)?;
        }
    }

    Ok(())
}
