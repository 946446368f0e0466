//! Value types shared by the `kit-typegen` commands.
//!
//! [`OutputFormat`] selects how a command report is printed. [`ExitCode`]
//! tells a calling build script whether to fix its inputs (`2`) or look at
//! the generation failure itself (`1`).
//!
//! # Examples
//!
//! ```
//! use kit_typegen_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format, OutputFormat::Json);
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! assert_eq!(ExitCode::ERROR.as_i32(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

/// How `sync` and `inspect` print their report.
///
/// All formats carry the same fields: `json` for tooling that parses the
/// report, `text` for `grep`-friendly `path: value` lines, `pretty` for a
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Pretty-printed output with colors for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// Process exit code of a `kit-typegen` run.
///
/// | Code | Meaning |
/// |---|---|
/// | `0` | All declarations written (or the report printed) |
/// | `1` | Generation failed: unreadable endpoint source, unknown file extension, template or write failure |
/// | `2` | The configuration or manifest file is missing, malformed or invalid |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Declarations written (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// Generation failed part-way (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Configuration or manifest rejected before generation (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Picks the exit code for a failed run.
    ///
    /// # Examples
    ///
    /// ```
    /// use kit_typegen_core::Error;
    /// use kit_typegen_core::cli::ExitCode;
    ///
    /// let err = Error::ConfigError { message: "extensions cannot be empty".to_string() };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn for_error(err: &crate::Error) -> Self {
        if err.is_config_error() || err.is_manifest_error() {
            Self::INVALID_INPUT
        } else {
            Self::ERROR
        }
    }

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
