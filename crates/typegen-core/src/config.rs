//! Generator configuration.
//!
//! The configuration is passed explicitly into every generation entry point;
//! nothing is read from ambient process state.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_core::TypegenConfig;
//!
//! let config = TypegenConfig::default();
//! assert_eq!(config.out_dir.to_str(), Some(".svelte-kit"));
//! assert_eq!(config.module_extensions, vec![".js", ".ts"]);
//!
//! let custom = TypegenConfig::default()
//!     .with_out_dir("build/.kit")
//!     .with_extensions(vec![".svelte".to_string(), ".svx".to_string()]);
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Default output directory, relative to [`TypegenConfig::root`].
pub const DEFAULT_OUT_DIR: &str = ".svelte-kit";

/// Default module the generated declarations import their generic types from.
pub const DEFAULT_TYPES_MODULE: &str = "@sveltejs/kit";

/// Configuration for a type generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypegenConfig {
    /// Project root. Manifest file paths are relative to it.
    ///
    /// Default: `.`
    pub root: PathBuf,

    /// Output directory, relative to `root`. Generated files land in
    /// `<out_dir>/types`.
    ///
    /// Default: `.svelte-kit`
    pub out_dir: PathBuf,

    /// Extensions recognised for endpoint and shadow modules.
    ///
    /// Default: `[".js", ".ts"]`
    pub module_extensions: Vec<String>,

    /// Extensions recognised for page components.
    ///
    /// Default: `[".svelte"]`
    pub extensions: Vec<String>,

    /// Module the generic framework types are imported from.
    ///
    /// Default: `@sveltejs/kit`
    pub types_module: String,
}

impl Default for TypegenConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            module_extensions: vec![".js".to_string(), ".ts".to_string()],
            extensions: vec![".svelte".to_string()],
            types_module: DEFAULT_TYPES_MODULE.to_string(),
        }
    }
}

impl TypegenConfig {
    /// Loads configuration from a TOML or JSON file.
    ///
    /// The format is chosen by extension: `.json` is parsed as JSON,
    /// anything else as TOML. Missing fields take their defaults. The
    /// loaded configuration is validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read, cannot be
    /// parsed, or fails [`validate`](Self::validate).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| Error::ConfigError {
                message: format!("failed to parse {}: {e}", path.display()),
            })?
        } else {
            toml::from_str(&content).map_err(|e| Error::ConfigError {
                message: format!("failed to parse {}: {e}", path.display()),
            })?
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Sets the project root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Sets the recognised module extensions.
    #[must_use]
    pub fn with_module_extensions(mut self, extensions: Vec<String>) -> Self {
        self.module_extensions = extensions;
        self
    }

    /// Sets the recognised component extensions.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the module generic types are imported from.
    #[must_use]
    pub fn with_types_module(mut self, module: impl Into<String>) -> Self {
        self.types_module = module.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if `out_dir` or `types_module` is
    /// empty, if `out_dir` is absolute or climbs out of `root`, if either extension list is empty, or if an extension does
    /// not start with `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::TypegenConfig;
    ///
    /// let config = TypegenConfig::default().with_module_extensions(vec![]);
    /// assert!(config.validate().unwrap_err().is_config_error());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "out_dir cannot be empty".to_string(),
            });
        }

        if self.out_dir_depth().is_none() {
            return Err(Error::ConfigError {
                message: format!(
                    "out_dir '{}' must be a relative path inside root",
                    self.out_dir.display()
                ),
            });
        }

        if self.types_module.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "types_module cannot be empty".to_string(),
            });
        }

        for (field, list) in [
            ("module_extensions", &self.module_extensions),
            ("extensions", &self.extensions),
        ] {
            if list.is_empty() {
                return Err(Error::ConfigError {
                    message: format!("{field} cannot be empty"),
                });
            }
            if let Some(bad) = list.iter().find(|ext| !ext.starts_with('.') || ext.len() < 2) {
                return Err(Error::ConfigError {
                    message: format!("{field} entry '{bad}' must start with '.'"),
                });
            }
        }

        Ok(())
    }

    /// Returns the directory all generated files are written to:
    /// `<root>/<out_dir>/types`.
    #[must_use]
    pub fn types_dir(&self) -> PathBuf {
        self.root.join(&self.out_dir).join("types")
    }

    /// Returns the number of directory hops from `<out_dir>/types` back to
    /// the project root.
    ///
    /// `.` components are ignored and `..` components cancel one hop.
    /// Only meaningful for a configuration that passed [`Self::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::TypegenConfig;
    ///
    /// assert_eq!(TypegenConfig::default().types_depth(), 2);
    /// assert_eq!(TypegenConfig::default().with_out_dir("./build/kit").types_depth(), 3);
    /// ```
    #[must_use]
    pub fn types_depth(&self) -> usize {
        self.out_dir_depth().unwrap_or(0) + 1
    }

    /// Counts the directories `out_dir` descends below `root`.
    ///
    /// `None` if the path is absolute or a `..` ever climbs above `root`.
    fn out_dir_depth(&self) -> Option<usize> {
        self.out_dir
            .components()
            .try_fold(0usize, |depth, component| match component {
                Component::Normal(_) => Some(depth + 1),
                Component::ParentDir => depth.checked_sub(1),
                Component::CurDir => Some(depth),
                Component::RootDir | Component::Prefix(_) => None,
            })
    }
}
