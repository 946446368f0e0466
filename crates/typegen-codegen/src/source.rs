//! Access to endpoint source files.
//!
//! The fetch map needs the text of every endpoint module. Reading goes
//! through [`SourceLoader`] so generation can run against the real project
//! tree or an in-memory set of files.

use kit_typegen_core::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads route module sources by their manifest path.
pub trait SourceLoader {
    /// Returns the full text of `file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`] if the file cannot be read.
    fn read_source(&self, file: &str) -> Result<String>;
}

/// Loads sources from disk, resolving manifest paths against a root.
///
/// # Examples
///
/// ```no_run
/// use kit_typegen_codegen::source::{FsSourceLoader, SourceLoader};
///
/// let loader = FsSourceLoader::new(".");
/// let text = loader.read_source("src/routes/api/posts.ts").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FsSourceLoader {
    root: PathBuf,
}

impl FsSourceLoader {
    /// Creates a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root manifest paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceLoader for FsSourceLoader {
    fn read_source(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        std::fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })
    }
}

/// In-memory sources keyed by manifest path.
impl SourceLoader for HashMap<String, String> {
    fn read_source(&self, file: &str) -> Result<String> {
        self.get(file).cloned().ok_or_else(|| Error::SourceRead {
            path: PathBuf::from(file),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such source"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_loader_resolves_against_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/routes")).unwrap();
        std::fs::write(temp.path().join("src/routes/api.ts"), "export type GetType = {};").unwrap();

        let loader = FsSourceLoader::new(temp.path());
        let text = loader.read_source("src/routes/api.ts").unwrap();
        assert_eq!(text, "export type GetType = {};");
    }

    #[test]
    fn test_fs_loader_missing_file() {
        let temp = TempDir::new().unwrap();
        let loader = FsSourceLoader::new(temp.path());

        let err = loader.read_source("src/routes/missing.ts").unwrap_err();
        assert!(err.is_io_error());
        assert!(err.to_string().contains("missing.ts"));
    }

    #[test]
    fn test_memory_loader() {
        let mut sources = HashMap::new();
        sources.insert("a.ts".to_string(), "text".to_string());

        assert_eq!(sources.read_source("a.ts").unwrap(), "text");
        assert!(sources.read_source("b.ts").is_err());
    }
}
