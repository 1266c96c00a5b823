//! Expansion state: which directories are open

use std::collections::HashSet;

use super::TreeNode;

/// Set of expanded directory paths. Anything not in the set is collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the directory at `path` is expanded
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Flip one path's flag and return the new value
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    /// Set one path's flag
    pub fn set(&mut self, path: &str, expanded: bool) {
        if expanded {
            self.expanded.insert(path.to_string());
        } else {
            self.expanded.remove(path);
        }
    }

    /// Collapse everything
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand every directory in the forest
    pub fn expand_all(&mut self, roots: &[TreeNode]) {
        for root in roots {
            root.walk(&mut |n| {
                if n.is_dir {
                    self.expanded.insert(n.path.clone());
                }
            });
        }
    }

    /// Drop entries that no longer name a directory in the forest
    pub fn retain_existing(&mut self, roots: &[TreeNode]) {
        let mut dirs = HashSet::new();
        for root in roots {
            root.walk(&mut |n| {
                if n.is_dir {
                    dirs.insert(n.path.as_str());
                }
            });
        }
        self.expanded.retain(|p| dirs.contains(p.as_str()));
    }

    /// Number of expanded paths
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded paths, sorted
    pub fn expanded_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.expanded.iter().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::new();
        assert!(!state.is_expanded("src"));
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_flips_only_that_path() {
        let mut state = ExpansionState::new();
        state.set("src", true);
        assert!(state.toggle("lib"));
        assert!(state.is_expanded("lib"));
        assert!(state.is_expanded("src"));
        assert!(!state.toggle("lib"));
        assert!(!state.is_expanded("lib"));
        assert!(state.is_expanded("src"));
    }

    #[test]
    fn expand_all_opens_directories_only() {
        let roots = build_tree(["src/a/b.rs", "src/c.rs", "top.md"]);
        let mut state = ExpansionState::new();
        state.expand_all(&roots);
        assert_eq!(state.expanded_paths(), vec!["src", "src/a"]);

        state.collapse_all();
        assert!(state.is_empty());
    }

    #[test]
    fn retain_existing_drops_vanished_paths() {
        let roots = build_tree(["src/a.rs"]);
        let mut state = ExpansionState::new();
        state.set("src", true);
        state.set("old", true);
        state.retain_existing(&roots);
        assert_eq!(state.expanded_paths(), vec!["src"]);
    }
}
