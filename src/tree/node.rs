//! Tree node definition and display ordering

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

/// One path segment in the file tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Display name (the segment itself)
    pub name: String,
    /// Slash-joined path from the root to this node
    pub path: String,
    /// Whether this segment had further segments beneath it when created
    pub is_dir: bool,
    /// Child nodes in insertion order
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new node with no children
    pub fn new(name: impl Into<String>, path: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir,
            children: Vec::new(),
        }
    }

    /// Get children (immutable), in insertion order
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Get children (mutable)
    pub(crate) fn children_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.children
    }

    /// Whether children should be drawn under this node when expanded
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Children in display order, leaving the stored order untouched
    pub fn sorted_children(&self) -> Vec<&TreeNode> {
        sort_nodes(&self.children)
    }

    /// Find a descendant (or self) by its full path
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        // Only descend where the path can still match
        if !path.starts_with(self.path.as_str()) {
            return None;
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    /// Visit this node and every descendant, depth-first in insertion order
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a TreeNode)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

/// Directories first, then names in locale order
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => locale_cmp(&a.name, &b.name),
    }
}

/// Sort a sibling collection for display
pub fn sort_nodes(nodes: &[TreeNode]) -> Vec<&TreeNode> {
    let mut sorted: Vec<&TreeNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| compare_nodes(a, b));
    sorted
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> = {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(Default::default(), options).ok()
    };
}

/// Human ordering for names using root-locale collation at tertiary
/// strength: accents and case only break ties after the base letters.
/// Equal collation keys fall back to code points so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => fold_cmp(a, b),
        })
        .then_with(|| a.cmp(b))
}

// Used only when collation data is unavailable.
fn fold_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            return match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => ca.cmp(&cb),
            };
        }
    }
    a.len().cmp(&b.len())
}
