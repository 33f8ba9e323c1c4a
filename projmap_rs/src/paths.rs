//! Path normalization helpers.
//!
//! Everything downstream works on segment sequences relative to the scan
//! root; this module is where raw walker paths get cut down to that shape.

use std::path::{MAIN_SEPARATOR, Path};

/// Strip everything up to and including the first occurrence of `root_dir_name`
/// among the path's segments. A path that never mentions the root is returned
/// unchanged rather than treated as an error; callers outside the expected
/// root get a pass-through.
pub fn remove_root(file_path: &str, root_dir_name: &str) -> String {
    let segments: Vec<&str> = file_path.split(MAIN_SEPARATOR).collect();
    match segments.iter().position(|segment| *segment == root_dir_name) {
        Some(idx) => segments[idx + 1..].join(&MAIN_SEPARATOR.to_string()),
        None => file_path.to_string(),
    }
}

/// Split a path into its non-empty segments. Leading separators and doubled
/// separators produce empty segments on split; those are dropped here so a
/// file sitting directly in the scan root contributes no tree keys.
pub fn split_segments(path: &str) -> Vec<String> {
    path.split(MAIN_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Basename of the path's parent directory: the "project" a file belongs to.
///
/// Returns `None` when the parent has no usable final component, which is
/// exactly the `.`/`..`/bare-specifier territory the aggregator excludes
/// anyway (`import 'react'`, `import './sibling'`).
pub fn project_name(path: &str) -> Option<String> {
    Path::new(path)
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}
