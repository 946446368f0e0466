//! Disk export for file trees.
//!
//! Writes a [`FileSystem`] under a base directory, plus the two standalone
//! disk operations a generation pass needs: [`write_file`] and
//! [`remove_recursive`].
//!
//! Export runs in three phases: collect every parent directory, create them
//! in one pass, then write files in tree order.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_files::FilesBuilder;
//! # use tempfile::TempDir;
//!
//! # let temp_dir = TempDir::new().unwrap();
//! # let output_dir = temp_dir.path().join("types");
//! let fs = FilesBuilder::new()
//!     .add_file("/fetch.d.ts", "export type JsonResponses = {};")
//!     .add_file("/src/routes/__types/index.d.ts", "export type Load = {};")
//!     .build()
//!     .unwrap();
//!
//! fs.export_to_filesystem(&output_dir).unwrap();
//!
//! assert!(output_dir.join("src/routes/__types/index.d.ts").exists());
//! ```

use crate::tree::FileSystem;
use crate::types::{FilesError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for writing files to disk.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Write to a temporary sibling and rename into place.
    ///
    /// Default: `true`
    pub atomic: bool,

    /// Replace files that already exist.
    ///
    /// Default: `true`
    pub overwrite: bool,
}

impl ExportOptions {
    /// Creates options with atomic writes and overwriting enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            overwrite: true,
        }
    }

    /// Sets whether writes go through a temporary file.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether existing files are replaced.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// Writes every file under `base_path` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::IoError`] if a directory or file cannot be
    /// written.
    pub fn export_to_filesystem(&self, base_path: impl AsRef<Path>) -> Result<()> {
        self.export_to_filesystem_with_options(base_path, &ExportOptions::default())
    }

    /// Writes every file under `base_path`.
    ///
    /// The base directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::IoError`] if a directory or file cannot be
    /// written.
    pub fn export_to_filesystem_with_options(
        &self,
        base_path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<()> {
        let base = base_path.as_ref();

        fs::create_dir_all(base).map_err(|e| FilesError::IoError {
            path: base.display().to_string(),
            source: e,
        })?;

        let dirs = self.collect_directories(base);
        Self::create_directories(&dirs)?;
        self.write_files(base, options)?;

        tracing::debug!(
            "Exported {} files ({} bytes) to {}",
            self.file_count(),
            self.total_size(),
            base.display()
        );
        Ok(())
    }

    fn collect_directories(&self, base: &Path) -> BTreeSet<PathBuf> {
        let mut dirs = BTreeSet::new();

        for (path, _) in self.files() {
            let disk_path = Self::to_disk_path(path.relative(), base);

            let mut current = disk_path.parent();
            while let Some(dir) = current {
                if dir == base || !dirs.insert(dir.to_path_buf()) {
                    break;
                }
                current = dir.parent();
            }
        }

        dirs
    }

    fn create_directories(dirs: &BTreeSet<PathBuf>) -> Result<()> {
        for dir in dirs {
            fs::create_dir_all(dir).map_err(|e| FilesError::IoError {
                path: dir.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }

    fn write_files(&self, base: &Path, options: &ExportOptions) -> Result<()> {
        for (path, entry) in self.files() {
            let disk_path = Self::to_disk_path(path.relative(), base);
            write_with_options(&disk_path, entry.content(), options)?;
        }
        Ok(())
    }

    fn to_disk_path(relative: &str, base: &Path) -> PathBuf {
        let relative_path = if cfg!(target_os = "windows") {
            PathBuf::from(relative.replace('/', "\\"))
        } else {
            PathBuf::from(relative)
        };

        base.join(relative_path)
    }
}

/// Writes UTF-8 text to `path`, creating parent directories and replacing
/// any existing file.
///
/// # Errors
///
/// Returns [`FilesError::IoError`] if a directory or the file cannot be
/// written.
///
/// # Examples
///
/// ```
/// use kit_typegen_files::write_file;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// let path = temp.path().join("types/fetch.d.ts");
/// write_file(&path, "export {};").unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {};");
/// ```
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FilesError::IoError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    write_with_options(path, content, &ExportOptions::default())
}

/// Deletes a directory tree. Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns [`FilesError::IoError`] if the tree exists but cannot be removed.
///
/// # Examples
///
/// ```
/// use kit_typegen_files::remove_recursive;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// let dir = temp.path().join("types");
/// remove_recursive(&dir).unwrap();
///
/// std::fs::create_dir_all(dir.join("nested")).unwrap();
/// remove_recursive(&dir).unwrap();
/// assert!(!dir.exists());
/// ```
pub fn remove_recursive(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FilesError::IoError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

fn write_with_options(path: &Path, content: &str, options: &ExportOptions) -> Result<()> {
    if !options.overwrite && path.exists() {
        return Ok(());
    }

    if options.atomic {
        let temp_path = path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).map_err(|e| FilesError::IoError {
            path: temp_path.display().to_string(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| FilesError::IoError {
                path: temp_path.display().to_string(),
                source: e,
            })?;

        fs::rename(&temp_path, path).map_err(|e| FilesError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
    } else {
        fs::write(path, content).map_err(|e| FilesError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilesBuilder;
    use tempfile::TempDir;

    fn sample() -> FileSystem {
        FilesBuilder::new()
            .add_file("/fetch.d.ts", "fetch")
            .add_file("/src/routes/blog/__types/[slug].d.ts", "slug")
            .add_file("/src/routes/__types/index.d.ts", "index")
            .build()
            .unwrap()
    }

    #[test]
    fn test_export_creates_base_and_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join(".svelte-kit/types");

        sample().export_to_filesystem(&base).unwrap();

        assert_eq!(fs::read_to_string(base.join("fetch.d.ts")).unwrap(), "fetch");
        assert_eq!(
            fs::read_to_string(base.join("src/routes/blog/__types/[slug].d.ts")).unwrap(),
            "slug"
        );
    }

    #[test]
    fn test_export_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        sample().export_to_filesystem(temp.path()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path().join("src/routes/__types"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_export_without_overwrite_keeps_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("fetch.d.ts"), "old").unwrap();

        let options = ExportOptions::new().with_overwrite(false);
        sample()
            .export_to_filesystem_with_options(temp.path(), &options)
            .unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("fetch.d.ts")).unwrap(), "old");
    }

    #[test]
    fn test_export_non_atomic() {
        let temp = TempDir::new().unwrap();
        let options = ExportOptions::new().with_atomic_writes(false);
        sample()
            .export_to_filesystem_with_options(temp.path(), &options)
            .unwrap();

        assert!(temp.path().join("src/routes/__types/index.d.ts").exists());
    }

    #[test]
    fn test_collect_directories_stops_at_base() {
        let base = Path::new("/out");
        let dirs = sample().collect_directories(base);

        assert!(dirs.contains(Path::new("/out/src/routes/blog/__types")));
        assert!(dirs.contains(Path::new("/out/src")));
        assert!(!dirs.contains(base));
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/c.d.ts");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_remove_recursive_missing_is_noop() {
        let temp = TempDir::new().unwrap();
        assert!(remove_recursive(temp.path().join("absent")).is_ok());
    }

    #[test]
    fn test_remove_recursive_tree() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("types");
        write_file(dir.join("x/__types/y.d.ts"), "").unwrap();

        remove_recursive(&dir).unwrap();
        assert!(!dir.exists());
        assert!(temp.path().exists());
    }
}
