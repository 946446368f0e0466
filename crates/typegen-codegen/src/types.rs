//! Output of a generation pass.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "fetch.d.ts".to_string(),
//!     content: "// this file is auto-generated".to_string(),
//! });
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// All files produced by one generation pass, in write order.
///
/// Paths are relative to the `types` output directory and always use `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Generated files in the order they must be written
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a generated file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a generated file by its relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "index/__types/index.d.ts".to_string(),
    ///     content: String::new(),
    /// });
    ///
    /// assert!(code.get("index/__types/index.d.ts").is_some());
    /// assert!(code.get("fetch.d.ts").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }
}

/// A single generated declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the `types` output directory
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_keeps_insertion_order() {
        let mut code = GeneratedCode::new();
        for name in ["fetch.d.ts", "b/__types/c.d.ts", "a/__types/b.d.ts"] {
            code.add_file(GeneratedFile {
                path: name.to_string(),
                content: String::new(),
            });
        }

        let paths: Vec<_> = code.files().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["fetch.d.ts", "b/__types/c.d.ts", "a/__types/b.d.ts"]);
    }

    #[test]
    fn test_generated_code_default_is_empty() {
        assert_eq!(GeneratedCode::default().file_count(), 0);
    }
}
