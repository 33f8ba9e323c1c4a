//! Filesystem traversal.
//!
//! The walker is deliberately dumb: enumerate every source file under a root,
//! in a stable (file-name-sorted) order, honoring ignore globs and the
//! hidden-file filter. Everything interesting happens downstream.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::types::Options;

pub fn matches_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_lowercase()))
        .unwrap_or(false)
}

fn build_ignore_set(patterns: &[String]) -> io::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    Ok(Some(set))
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Enumerate every file under `root` whose extension is in the configured
/// set. Entries are visited in file-name order so repeated scans of the same
/// tree produce the same list.
pub fn gather_source_files(root: &Path, options: &Options) -> io::Result<Vec<PathBuf>> {
    let ignore_set = build_ignore_set(&options.ignore_patterns)?;
    let show_hidden = options.show_hidden;

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(max) = options.max_depth {
        // -L 0 means "direct children only"; walkdir counts the root as depth 0.
        walker = walker.max_depth(max.saturating_add(1));
    }

    let mut files = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || show_hidden || !is_hidden(e.file_name()))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !matches_extension(path, &options.extensions) {
            continue;
        }
        if let Some(set) = &ignore_set {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if set.is_match(relative) {
                continue;
            }
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Parent directory of each gathered file, one entry per file. Duplicates are
/// expected when a directory holds several source files; downstream
/// consumers dedupe where it matters.
pub fn read_directory(root: &Path, options: &Options) -> io::Result<Vec<PathBuf>> {
    let files = gather_source_files(root, options)?;
    Ok(files
        .iter()
        .filter_map(|file| file.parent().map(Path::to_path_buf))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{gather_source_files, read_directory};
    use crate::types::Options;

    fn write(root: &std::path::Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write fixture file");
    }

    #[test]
    fn gathers_matching_files_in_sorted_order() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(root, "b/late.ts", "");
        write(root, "a/early.ts", "");
        write(root, "a/skip.txt", "");

        let files = gather_source_files(root, &Options::default()).expect("gather");
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .expect("relative")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["a/early.ts", "b/late.ts"]);
    }

    #[test]
    fn skips_hidden_entries_unless_requested() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(root, ".hidden/h.ts", "");
        write(root, "visible/v.ts", "");

        let files = gather_source_files(root, &Options::default()).expect("gather");
        assert_eq!(files.len(), 1);

        let opts = Options {
            show_hidden: true,
            ..Options::default()
        };
        let files = gather_source_files(root, &opts).expect("gather hidden");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn honors_ignore_globs_and_max_depth() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(root, "keep/k.ts", "");
        write(root, "node_modules/dep/d.ts", "");
        write(root, "deep/nested/far/f.ts", "");

        let opts = Options {
            ignore_patterns: vec!["node_modules/**".to_string()],
            max_depth: Some(1),
            ..Options::default()
        };
        let files = gather_source_files(root, &opts).expect("gather");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().expect("name").to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["k.ts"]);
    }

    #[test]
    fn read_directory_yields_one_parent_per_file() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(root, "proj/a.ts", "");
        write(root, "proj/b.ts", "");

        let dirs = read_directory(root, &Options::default()).expect("read");
        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| d.ends_with("proj")));
    }
}
