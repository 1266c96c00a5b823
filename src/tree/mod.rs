//! Tree module - path filtering, tree building, expansion state and navigation

pub mod builder;
pub mod expansion;
pub mod filter;
pub mod navigator;
pub mod node;

pub use builder::{build_filtered_tree, build_tree, count_leaves};
pub use expansion::ExpansionState;
pub use filter::{filter_paths, is_excluded, normalize_separators, PathFilter};
pub use navigator::{TreeNavigator, VisibleRow};
pub use node::{compare_nodes, locale_cmp, sort_nodes, TreeNode};
