//! # projmap
//!
//! **Project structure and dependency mapping** for TypeScript codebases.
//!
//! projmap scans a directory tree of source files and derives two views:
//!
//! - **Directory tree** - a nested prefix tree over path segments, with a
//!   validation gate that rejects trees reusing the same directory name at
//!   different depths (a common source of ambiguous imports).
//! - **Project dependency map** - each file's imports rolled up to its
//!   "project" (the file's parent directory), self-references and
//!   relative-path noise removed.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use std::path::Path;
//! use projmap::{Options, directory_object, imports, read_project};
//!
//! let options = Options::default();
//! let tree = directory_object(Path::new("."), &options)?;
//! let deps = read_project(Path::new("."), &options, imports::parse_imports)?;
//! # Ok::<(), projmap::ProjmapError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! projmap                   # Project dependency map of the current dir
//! projmap --tree src        # Directory structure with duplicate validation
//! projmap --json --sorted   # Canonical JSON for diffing/CI
//! ```

/// Command-line argument parsing.
pub mod args;

/// ANSI color helpers for CLI output.
pub mod colors;

/// Optional `.projmap.toml` configuration.
pub mod config;

/// Project-level dependency aggregation.
pub mod deps;

/// Library error type.
pub mod error;

/// Source file walker.
pub mod fs_utils;

/// Regex-based TypeScript import extraction (the default import-parsing
/// collaborator; [`deps::aggregate`] accepts any replacement).
pub mod imports;

/// Path segment normalization.
pub mod paths;

/// Canonical sorted-key rewriting of JSON values.
pub mod sort;

/// Directory tree construction and duplicate-directory validation.
pub mod tree;

/// Shared option and mode types.
pub mod types;

pub use deps::{DependencyMap, aggregate, read_project};
pub use error::ProjmapError;
pub use paths::{project_name, remove_root, split_segments};
pub use sort::sort_object_keys;
pub use tree::{TreeNode, build_tree, directory_object, find_duplicate_dirs};
pub use types::{ColorMode, Mode, Options, OutputMode};
