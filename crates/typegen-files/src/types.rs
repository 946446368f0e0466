//! Core types for the generated file tree.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_files::{FileEntry, FilePath};
//!
//! let path = FilePath::new("/src/routes/blog/__types/[slug].d.ts").unwrap();
//! let file = FileEntry::new("// this file is auto-generated");
//!
//! assert_eq!(path.relative(), "src/routes/blog/__types/[slug].d.ts");
//! assert_eq!(file.size(), 30);
//! ```

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors from building or exporting a file tree.
#[derive(Error, Debug)]
pub enum FilesError {
    /// File does not exist in the tree
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Path is empty, not UTF-8, or not rooted at `/`
    #[error("Invalid path: {path}")]
    InvalidPath {
        /// The rejected path
        path: String,
    },

    /// Path contains a `.` or `..` component
    #[error("Path contains invalid components: {path}")]
    InvalidPathComponent {
        /// The rejected path
        path: String,
    },

    /// Disk operation failed
    #[error("I/O error at {path}: {source}")]
    IoError {
        /// Disk path involved
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Returns `true` if the path itself was rejected.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. } | Self::InvalidPathComponent { .. }
        )
    }

    /// Returns `true` if a disk operation failed.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

impl From<FilesError> for kit_typegen_core::Error {
    fn from(error: FilesError) -> Self {
        match error {
            FilesError::IoError { path, source } => Self::Io {
                path: path.into(),
                source,
            },
            other => Self::InvalidArgument(other.to_string()),
        }
    }
}

/// Path inside the file tree.
///
/// Always rooted at `/` with forward slashes, on every platform. Bracketed
/// route segments such as `[...rest]` are allowed; only whole `.` and `..`
/// components are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(String);

impl FilePath {
    /// Validates and normalizes a tree path.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::InvalidPath`] if the path is empty, not UTF-8,
    /// or not rooted at `/`, and [`FilesError::InvalidPathComponent`] if a
    /// component is `.` or `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_files::FilePath;
    ///
    /// assert!(FilePath::new("/src/routes/[...rest].d.ts").is_ok());
    /// assert!(FilePath::new("/src/../escape.d.ts").is_err());
    /// assert!(FilePath::new("relative.d.ts").is_err());
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let path_str = path.to_str().ok_or_else(|| FilesError::InvalidPath {
            path: path.display().to_string(),
        })?;

        let normalized = if cfg!(target_os = "windows") {
            path_str.replace(std::path::MAIN_SEPARATOR, "/")
        } else {
            path_str.to_string()
        };

        if normalized.is_empty() || !normalized.starts_with('/') {
            return Err(FilesError::InvalidPath { path: normalized });
        }

        if normalized.split('/').any(|part| part == ".." || part == ".") {
            return Err(FilesError::InvalidPathComponent { path: normalized });
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a string, including the leading `/`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading `/`.
    #[must_use]
    pub fn relative(&self) -> &str {
        self.0.strip_prefix('/').unwrap_or(&self.0)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Contents of one file in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    content: String,
}

impl FileEntry {
    /// Creates an entry with the given text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the file text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.content.len()
    }
}

/// Result type for file tree operations.
pub type Result<T> = std::result::Result<T, FilesError>;
