//! Directory structure tree: prefix-tree construction over path segments,
//! duplicate-directory validation, and the human-readable rendering.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::colors::Painter;
use crate::error::ProjmapError;
use crate::fs_utils;
use crate::paths::{remove_root, split_segments};
use crate::types::Options;

/// One level of the directory tree: segment name to subtree. Serializes as a
/// plain JSON object. Key order follows insertion but carries no meaning;
/// equality ignores it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreeNode(pub IndexMap<String, TreeNode>);

impl TreeNode {
    /// Walk the segments from this node, creating missing children. Linear
    /// insertion only; unrelated nodes are never merged.
    pub fn insert_path(&mut self, segments: &[String]) {
        let mut node = self;
        for segment in segments {
            node = node.0.entry(segment.clone()).or_default();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fold segment lists into a prefix tree. Lists sharing a prefix share the
/// corresponding subtree; insertion order never changes the final shape.
pub fn build_tree(lists: &[Vec<String>]) -> TreeNode {
    let mut root = TreeNode::default();
    for list in lists {
        root.insert_path(list);
    }
    root
}

/// Directory names that occur at two or more distinct positional indices
/// across the input lists, in first-encounter order.
///
/// This is a position-collision check, not a multiplicity check: a name
/// sitting at the same index in every path is fine, a name at index 0 in one
/// path and index 2 in another is flagged.
pub fn find_duplicate_dirs(lists: &[Vec<String>]) -> Vec<String> {
    let mut positions: IndexMap<String, IndexSet<usize>> = IndexMap::new();
    for list in lists {
        for (ix, name) in list.iter().enumerate() {
            positions.entry(name.clone()).or_default().insert(ix);
        }
    }
    positions
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Scan `directory` and return its structure tree. The scanned directory's
/// own basename is the implicit root, never a key. Fails with
/// [`ProjmapError::DuplicateDirectories`] before returning any tree when the
/// duplicate check trips.
pub fn directory_object(directory: &Path, options: &Options) -> Result<TreeNode, ProjmapError> {
    let root = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let dirs = fs_utils::read_directory(&root, options)?;
    let lists: Vec<Vec<String>> = dirs
        .iter()
        .map(|dir| split_segments(&remove_root(&dir.to_string_lossy(), &root_name)))
        .collect();

    let duplicates = find_duplicate_dirs(&lists);
    if !duplicates.is_empty() {
        return Err(ProjmapError::DuplicateDirectories { names: duplicates });
    }
    Ok(build_tree(&lists))
}

/// Render the tree with box-drawing branches for terminal output.
pub fn render_tree(tree: &TreeNode, painter: &Painter) -> String {
    let mut out = String::new();
    render_level(tree, "", painter, &mut out);
    out
}

fn render_level(node: &TreeNode, prefix: &str, painter: &Painter, out: &mut String) {
    let len = node.0.len();
    for (idx, (name, child)) in node.0.iter().enumerate() {
        let is_last = idx + 1 == len;
        let branch = if is_last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(&painter.dim(branch));
        out.push_str(name);
        out.push('\n');
        let continuation = if is_last { "    " } else { "│   " };
        let next_prefix = format!("{prefix}{}", painter.dim(continuation));
        render_level(child, &next_prefix, painter, out);
    }
}

#[cfg(test)]
mod tests {
    use super::{TreeNode, build_tree, directory_object, find_duplicate_dirs, render_tree};
    use crate::colors::Painter;
    use crate::error::ProjmapError;
    use crate::types::{ColorMode, Options};

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn build_tree_shares_prefixes() {
        let tree = build_tree(&[segments(&["a", "b", "c"]), segments(&["a", "b", "d"])]);
        let a = tree.0.get("a").expect("a");
        let b = a.0.get("b").expect("b");
        assert_eq!(b.0.len(), 2);
        assert!(b.0.contains_key("c"));
        assert!(b.0.contains_key("d"));
    }

    #[test]
    fn build_tree_is_insertion_order_independent() {
        let lists = [
            segments(&["a", "b"]),
            segments(&["c"]),
            segments(&["a", "d"]),
        ];
        let forward = build_tree(&lists);
        let mut reversed = lists.to_vec();
        reversed.reverse();
        let backward = build_tree(&reversed);
        // IndexMap equality ignores order, so this compares keys per level.
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        let tree = build_tree(&[]);
        assert!(tree.is_empty());
        let tree = build_tree(&[Vec::new()]);
        assert!(tree.is_empty());
    }

    #[test]
    fn tree_serializes_as_nested_object() {
        let tree = build_tree(&[segments(&["a", "b"])]);
        let json = serde_json::to_string(&tree).expect("serialize");
        assert_eq!(json, r#"{"a":{"b":{}}}"#);
    }

    #[test]
    fn find_duplicate_dirs_flags_position_collisions() {
        let dupes = find_duplicate_dirs(&[segments(&["a", "b"]), segments(&["x", "a", "y"])]);
        assert_eq!(dupes, vec!["a"]);
    }

    #[test]
    fn same_position_everywhere_is_not_a_duplicate() {
        let dupes = find_duplicate_dirs(&[
            segments(&["shared", "one"]),
            segments(&["shared", "two"]),
        ]);
        assert!(dupes.is_empty());
    }

    #[test]
    fn non_overlapping_names_yield_no_duplicates() {
        let dupes = find_duplicate_dirs(&[segments(&["a", "b"]), segments(&["c", "d"])]);
        assert!(dupes.is_empty());
    }

    #[test]
    fn duplicates_reported_in_first_encounter_order() {
        let dupes = find_duplicate_dirs(&[
            segments(&["b", "a"]),
            segments(&["a", "b"]),
        ]);
        assert_eq!(dupes, vec!["b", "a"]);
    }

    #[test]
    fn directory_object_builds_nested_tree() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path().join("app");
        std::fs::create_dir_all(root.join("projA/inner")).expect("mkdir");
        std::fs::create_dir_all(root.join("projB")).expect("mkdir");
        std::fs::write(root.join("projA/inner/f.ts"), "").expect("write");
        std::fs::write(root.join("projB/g.ts"), "").expect("write");

        let tree = directory_object(&root, &Options::default()).expect("tree");
        let a = tree.0.get("projA").expect("projA");
        assert!(a.0.contains_key("inner"));
        assert!(tree.0.get("projB").expect("projB").is_empty());
    }

    #[test]
    fn directory_object_rejects_duplicate_directories() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path().join("app");
        std::fs::create_dir_all(root.join("x/shared")).expect("mkdir");
        std::fs::create_dir_all(root.join("y/z/shared")).expect("mkdir");
        std::fs::write(root.join("x/shared/a.ts"), "").expect("write");
        std::fs::write(root.join("y/z/shared/b.ts"), "").expect("write");

        let err = directory_object(&root, &Options::default()).expect_err("duplicate");
        match &err {
            ProjmapError::DuplicateDirectories { names } => {
                assert_eq!(names, &vec!["shared".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.to_string(), "Duplicate directories found: shared");
    }

    #[test]
    fn files_in_scan_root_contribute_no_keys() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path().join("app");
        std::fs::create_dir_all(&root).expect("mkdir");
        std::fs::write(root.join("top.ts"), "").expect("write");

        let tree = directory_object(&root, &Options::default()).expect("tree");
        assert!(tree.is_empty());
    }

    #[test]
    fn render_tree_uses_branch_glyphs() {
        let mut tree = TreeNode::default();
        tree.insert_path(&segments(&["a", "b"]));
        tree.insert_path(&segments(&["c"]));
        let painter = Painter::new(ColorMode::Never);
        let rendered = render_tree(&tree, &painter);
        assert_eq!(rendered, "├── a\n│   └── b\n└── c\n");
    }
}
