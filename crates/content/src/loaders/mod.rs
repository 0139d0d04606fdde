//! Loaders for reading training data from files.
//!
//! The situation→action table lives in a human-edited TOML file: the
//! enumeration is machine-generated, the action column is filled in by
//! hand. The loader validates the file against the deterministic
//! enumeration before anything reaches the engine.

pub mod table;

pub use table::TableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
