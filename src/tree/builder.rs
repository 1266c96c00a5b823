//! Build a nested tree out of a flat list of slash-delimited paths

use super::filter::PathFilter;
use super::TreeNode;

/// Build root-level nodes from an already filtered list of paths.
///
/// Paths sharing a prefix share nodes. A node's `is_dir` flag is fixed when
/// the node is first created: a segment first seen as the last segment of a
/// path stays a leaf even if a later path nests entries beneath it.
pub fn build_tree<I, S>(paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roots: Vec<TreeNode> = Vec::new();

    for path in paths {
        insert_path(&mut roots, path.as_ref());
    }

    roots
}

/// Normalize, filter, then build
pub fn build_filtered_tree<I, S>(paths: I, filter: &PathFilter) -> Vec<TreeNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filtered = filter.apply(paths);
    let roots = build_tree(&filtered);
    tracing::debug!(paths = filtered.len(), roots = roots.len(), "built file tree");
    roots
}

fn insert_path(roots: &mut Vec<TreeNode>, path: &str) {
    let parts: Vec<&str> = path.split('/').collect();
    let mut level = roots;

    for (index, part) in parts.iter().enumerate() {
        let is_last = index == parts.len() - 1;

        let pos = match level.iter().position(|node| node.name == *part) {
            Some(pos) => pos,
            None => {
                let node_path = parts[..=index].join("/");
                level.push(TreeNode::new(*part, node_path, !is_last));
                level.len() - 1
            }
        };
        level = level[pos].children_mut();
    }
}

/// Count the leaves (non-directory nodes) in a forest
pub fn count_leaves(roots: &[TreeNode]) -> usize {
    let mut count = 0;
    for root in roots {
        root.walk(&mut |n| {
            if !n.is_dir {
                count += 1;
            }
        });
    }
    count
}
