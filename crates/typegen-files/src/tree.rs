//! In-memory file tree.
//!
//! Holds generated files keyed by tree path. Files keep the order they were
//! first added in, which is also the order they are written to disk.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_files::FileSystem;
//!
//! let mut fs = FileSystem::new();
//! fs.add_file("/fetch.d.ts", "// this file is auto-generated").unwrap();
//!
//! assert_eq!(fs.read_file("/fetch.d.ts").unwrap(), "// this file is auto-generated");
//! assert!(!fs.exists("/index.d.ts"));
//! ```

use crate::types::{FileEntry, FilePath, FilesError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Ordered in-memory file tree.
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    entries: Vec<(FilePath, FileEntry)>,
    index: HashMap<FilePath, usize>,
}

impl FileSystem {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, replacing the content of an existing path in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let path = FilePath::new(path)?;
        let entry = FileEntry::new(content);

        if let Some(&slot) = self.index.get(&path) {
            self.entries[slot].1 = entry;
        } else {
            self.index.insert(path.clone(), self.entries.len());
            self.entries.push((path, entry));
        }
        Ok(())
    }

    /// Returns the content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::FileNotFound`] if the path is not in the tree.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<&str> {
        let path = FilePath::new(path)?;
        self.index
            .get(&path)
            .map(|&slot| self.entries[slot].1.content())
            .ok_or_else(|| FilesError::FileNotFound {
                path: path.as_str().to_string(),
            })
    }

    /// Returns `true` if the path is in the tree.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        FilePath::new(path).is_ok_and(|p| self.index.contains_key(&p))
    }

    /// Iterates files in insertion order.
    pub fn files(&self) -> impl Iterator<Item = (&FilePath, &FileEntry)> {
        self.entries.iter().map(|(path, entry)| (path, entry))
    }

    /// Returns the number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the total size of all files in bytes.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.entries.iter().map(|(_, entry)| entry.size()).sum()
    }
}
