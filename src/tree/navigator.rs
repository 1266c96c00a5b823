//! Tree navigator - owns the built tree and its expansion state, and
//! flattens both into the rows that get drawn

use super::{build_filtered_tree, ExpansionState, PathFilter, TreeNode};

/// A visible row: a node and its nesting depth
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub expanded: bool,
}

/// Manages the file tree and which directories are open
#[derive(Debug, Clone)]
pub struct TreeNavigator {
    /// Root-level nodes
    roots: Vec<TreeNode>,
    /// Open directories, keyed by path
    expansion: ExpansionState,
    /// Filter applied on every rebuild
    filter: PathFilter,
}

impl TreeNavigator {
    /// Build a navigator for the given path list
    pub fn new<I, S>(files: I, filter: PathFilter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots = build_filtered_tree(files, &filter);
        Self {
            roots,
            expansion: ExpansionState::new(),
            filter,
        }
    }

    /// Get root nodes
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Get expansion state
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Rebuild from a new path list, keeping open directories that survive
    pub fn set_files<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roots = build_filtered_tree(files, &self.filter);
        self.expansion.retain_existing(&self.roots);
    }

    /// Flatten the tree into a list of visible rows, in display order
    pub fn visible_entries(&self) -> Vec<VisibleRow<'_>> {
        let mut rows = Vec::new();
        self.collect_visible(&self.roots, 0, &mut rows);
        rows
    }

    fn collect_visible<'a>(
        &'a self,
        nodes: &'a [TreeNode],
        depth: usize,
        out: &mut Vec<VisibleRow<'a>>,
    ) {
        for node in super::sort_nodes(nodes) {
            let expanded = node.is_dir && self.expansion.is_expanded(&node.path);
            out.push(VisibleRow {
                node,
                depth,
                expanded,
            });
            if expanded && node.has_children() {
                self.collect_visible(node.children(), depth + 1, out);
            }
        }
    }

    /// Get total count of visible rows
    pub fn visible_count(&self) -> usize {
        self.visible_entries().len()
    }

    /// Find a node by path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        self.roots.iter().find_map(|r| r.find(path))
    }

    /// Whether the directory at `path` is open
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expansion.is_expanded(path)
    }

    /// Toggle expand/collapse for the directory at `path`.
    /// Returns the new state, or `None` if `path` is not a directory.
    pub fn toggle_expand(&mut self, path: &str) -> Option<bool> {
        let is_dir = self.find(path).is_some_and(|n| n.is_dir);
        is_dir.then(|| self.expansion.toggle(path))
    }

    /// Expand the directory at `path`
    pub fn expand(&mut self, path: &str) {
        if self.find(path).is_some_and(|n| n.is_dir) {
            self.expansion.set(path, true);
        }
    }

    /// Collapse the directory at `path`
    pub fn collapse(&mut self, path: &str) {
        self.expansion.set(path, false);
    }

    /// Expand every directory
    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.roots);
    }

    /// Collapse every directory
    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }
}
