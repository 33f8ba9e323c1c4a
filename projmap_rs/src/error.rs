use thiserror::Error;

/// Errors surfaced by the library. Duplicate-directory detection is the only
/// validation the core performs itself; everything else is a propagated
/// collaborator failure.
#[derive(Debug, Error)]
pub enum ProjmapError {
    /// The same directory name occurs at two or more distinct depths across
    /// the scanned tree. Terminal: no tree is returned alongside this.
    #[error("Duplicate directories found: {}", .names.join(", "))]
    DuplicateDirectories { names: Vec<String> },

    /// Walker or import-parser failure for an individual file. Not retried,
    /// no partial output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
