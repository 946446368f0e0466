//! Builder for file trees.
//!
//! Collects files from generated code or one at a time. Path errors are
//! deferred and reported by [`FilesBuilder::build`].
//!
//! # Examples
//!
//! ```
//! use kit_typegen_files::FilesBuilder;
//!
//! let fs = FilesBuilder::new()
//!     .add_file("/fetch.d.ts", "export type JsonResponses = {};")
//!     .add_file("/src/routes/__types/index.d.ts", "export type Load = {};")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fs.file_count(), 2);
//! ```

use crate::filesystem::ExportOptions;
use crate::tree::FileSystem;
use crate::types::{FilesError, Result};
use kit_typegen_codegen::GeneratedCode;
use std::path::Path;

/// Builder for [`FileSystem`] instances.
#[derive(Debug, Default)]
pub struct FilesBuilder {
    fs: FileSystem,
    errors: Vec<FilesError>,
}

impl FilesBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding every file of a generation pass.
    ///
    /// Generated paths are relative; they are placed under `base_path`
    /// inside the tree, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::{GeneratedCode, GeneratedFile};
    /// use kit_typegen_files::FilesBuilder;
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "src/routes/__types/about.d.ts".to_string(),
    ///     content: String::new(),
    /// });
    ///
    /// let fs = FilesBuilder::from_generated_code(code, "/").build().unwrap();
    /// assert!(fs.exists("/src/routes/__types/about.d.ts"));
    /// ```
    #[must_use]
    pub fn from_generated_code(code: GeneratedCode, base_path: impl AsRef<Path>) -> Self {
        let base = base_path.as_ref().to_string_lossy();

        let base_normalized = if base.ends_with('/') {
            base.into_owned()
        } else {
            format!("{base}/")
        };

        code.files.into_iter().fold(Self::new(), |builder, file| {
            // String concatenation keeps tree paths forward-slash separated.
            let full_path = format!("{base_normalized}{}", file.path);
            builder.add_file(full_path.as_str(), file.content)
        })
    }

    /// Adds a file. An invalid path is recorded and reported by `build`.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Err(e) = self.fs.add_file(path, content) {
            self.errors.push(e);
        }
        self
    }

    /// Adds several files.
    #[must_use]
    pub fn add_files<P, C>(self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<Path>,
        C: Into<String>,
    {
        files
            .into_iter()
            .fold(self, |builder, (path, content)| builder.add_file(path, content))
    }

    /// Returns the number of files added so far.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.fs.file_count()
    }

    /// Finishes the tree.
    ///
    /// # Errors
    ///
    /// Returns the first path error recorded while adding files.
    pub fn build(self) -> Result<FileSystem> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        Ok(self.fs)
    }

    /// Finishes the tree and writes it under `base_path`.
    ///
    /// # Errors
    ///
    /// Returns a recorded path error, or an I/O error from the export.
    pub fn build_and_export(self, base_path: impl AsRef<Path>) -> Result<FileSystem> {
        let fs = self.build()?;
        fs.export_to_filesystem_with_options(base_path, &ExportOptions::default())?;
        Ok(fs)
    }
}
