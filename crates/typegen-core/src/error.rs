//! Error types for route type generation.
//!
//! A single error hierarchy shared by every crate in the workspace. Each
//! variant carries the path or value that caused it so the build step can
//! abort with an actionable message.
//!
//! # Examples
//!
//! ```
//! use kit_typegen_core::{Error, Result};
//!
//! fn check_out_dir(dir: &str) -> Result<()> {
//!     if dir.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "out_dir cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_out_dir("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for route type generation.
///
/// Every failure is fatal to the generation pass: there is no retry and no
/// partial-output guarantee.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Manifest could not be loaded or parsed.
    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest {
        /// Manifest file that failed to load
        path: PathBuf,
        /// Description of the failure
        message: String,
        /// Underlying serde error, if parsing failed
        #[source]
        source: Option<serde_json::Error>,
    },

    /// No configured extension matches a route or component file.
    #[error("No matching extension for '{path}' (expected one of: {})", extensions.join(", "))]
    NoMatchingExtension {
        /// File path that did not match
        path: String,
        /// Extensions that were tried
        extensions: Vec<String>,
    },

    /// A bracketed route segment is not a valid parameter.
    #[error("Invalid route id '{id}': {reason}")]
    InvalidRouteId {
        /// Route id or key being parsed
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// Endpoint source file could not be read.
    #[error("Failed to read endpoint source {}", path.display())]
    SourceRead {
        /// Path of the unreadable source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Filesystem operation failed while writing or clearing output.
    #[error("I/O error at {}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "empty extension list".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a manifest error.
    #[must_use]
    pub const fn is_manifest_error(&self) -> bool {
        matches!(self, Self::Manifest { .. })
    }

    /// Returns `true` if no configured extension matched a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::Error;
    ///
    /// let err = Error::NoMatchingExtension {
    ///     path: "src/routes/index.md".to_string(),
    ///     extensions: vec![".svelte".to_string()],
    /// };
    /// assert!(err.is_extension_error());
    /// ```
    #[must_use]
    pub const fn is_extension_error(&self) -> bool {
        matches!(self, Self::NoMatchingExtension { .. })
    }

    /// Returns `true` if this error came from the filesystem.
    ///
    /// Covers both unreadable endpoint sources and failed writes.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::SourceRead { .. } | Self::Io { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

/// Type alias for Results using the generator error type.
///
/// # Examples
///
/// ```
/// use kit_typegen_core::Result;
///
/// fn segment_count(key: &str) -> Result<usize> {
///     Ok(key.split('/').count())
/// }
///
/// assert_eq!(segment_count("a/b").unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = Error::ConfigError {
            message: "bad out_dir".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad out_dir");
        assert!(err.is_config_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_no_matching_extension_lists_candidates() {
        let err = Error::NoMatchingExtension {
            path: "src/routes/about.md".to_string(),
            extensions: vec![".svelte".to_string(), ".svx".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("src/routes/about.md"));
        assert!(message.contains(".svelte, .svx"));
        assert!(err.is_extension_error());
    }

    #[test]
    fn test_source_read_keeps_io_source() {
        let err = Error::SourceRead {
            path: PathBuf::from("src/routes/api.ts"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_io_error());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("src/routes/api.ts"));
    }

    #[test]
    fn test_manifest_error_without_source() {
        let err = Error::Manifest {
            path: PathBuf::from("manifest.json"),
            message: "unreadable".to_string(),
            source: None,
        };
        assert!(err.is_manifest_error());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
