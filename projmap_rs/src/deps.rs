//! Project-level dependency aggregation.
//!
//! A "project" is the immediate parent directory of a source file. Per-file
//! import lists (supplied by an explicit collaborator, see [`crate::imports`]
//! for the shipped one) are folded into one adjacency mapping.

use std::io;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::error::ProjmapError;
use crate::fs_utils;
use crate::paths::project_name;
use crate::types::Options;

/// Project name to the ordered, deduplicated list of projects it imports
/// from. One entry per project encountered, even when the list is empty.
pub type DependencyMap = IndexMap<String, Vec<String>>;

/// Fold per-file import lists into the project adjacency mapping.
///
/// Files are processed in input order; dependency names accumulate
/// append-then-dedupe, so a project seen across several files keeps its
/// earlier entries and order. Self-references and the `.`/`..` artifacts of
/// relative resolution are dropped. A parser failure for any file aborts the
/// whole aggregation.
pub fn aggregate<F>(files: &[PathBuf], mut parse_imports: F) -> Result<DependencyMap, ProjmapError>
where
    F: FnMut(&Path) -> io::Result<Vec<String>>,
{
    let mut accumulated: IndexMap<String, IndexSet<String>> = IndexMap::new();
    for file in files {
        let project =
            project_name(&file.to_string_lossy()).unwrap_or_else(|| ".".to_string());
        let targets = parse_imports(file)?;
        let entry = accumulated.entry(project.clone()).or_default();
        for target in targets {
            let Some(dep) = project_name(&target) else {
                continue;
            };
            if dep == project || dep == "." || dep == ".." {
                continue;
            }
            entry.insert(dep);
        }
    }
    Ok(accumulated
        .into_iter()
        .map(|(project, deps)| (project, deps.into_iter().collect()))
        .collect())
}

/// Scan `directory` for source files and aggregate their imports into the
/// project dependency map. The import parser is a caller-supplied strategy;
/// there is no baked-in default.
pub fn read_project<F>(
    directory: &Path,
    options: &Options,
    parse_imports: F,
) -> Result<DependencyMap, ProjmapError>
where
    F: FnMut(&Path) -> io::Result<Vec<String>>,
{
    let root = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());
    let files = fs_utils::gather_source_files(&root, options)?;
    aggregate(&files, parse_imports)
}
