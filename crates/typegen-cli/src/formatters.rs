//! Output formatters for CLI commands.
//!
//! Every command report is a `Serialize` value. `json` prints it as JSON,
//! `text` as flat `path: value` lines for scripts, and `pretty` as an
//! indented, colorized outline for terminals.

use anyhow::Result;
use colored::Colorize;
use kit_typegen_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
///
/// # Examples
///
/// ```
/// use kit_typegen_cli::formatters::format_output;
/// use kit_typegen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Report {
///     files_written: usize,
/// }
///
/// let output = format_output(&Report { files_written: 3 }, OutputFormat::Text)?;
/// assert_eq!(output, "files_written: 3");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Value};

    /// Format data as one `path: value` line per scalar.
    ///
    /// Nested fields are addressed with `.` and array items with `[i]`.
    /// Strings are printed unquoted.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten(&value, String::new(), &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(value: &Value, path: String, lines: &mut Vec<String>) {
        match value {
            Value::Object(obj) if !obj.is_empty() => {
                for (key, val) in obj {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    flatten(val, child, lines);
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for (i, item) in arr.iter().enumerate() {
                    flatten(item, format!("{path}[{i}]"), lines);
                }
            }
            scalar => {
                let rendered = scalar_text(scalar);
                if path.is_empty() {
                    lines.push(rendered);
                } else {
                    lines.push(format!("{path}: {rendered}"));
                }
            }
        }
    }

    pub(super) fn scalar_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Object(_) => "{}".to_string(),
            Value::Array(_) => "[]".to_string(),
            other => other.to_string(),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value, text};

    /// Format data as a colorized, indented outline.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        outline(&value, 0, &mut lines);
        Ok(lines.join("\n"))
    }

    fn is_leaf(value: &Value) -> bool {
        match value {
            Value::Object(obj) => obj.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            _ => true,
        }
    }

    fn outline(value: &Value, indent: usize, lines: &mut Vec<String>) {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(obj) if !obj.is_empty() => {
                for (key, val) in obj {
                    let key = key.blue().bold();
                    if is_leaf(val) {
                        lines.push(format!("{pad}{key}: {}", colorize(val)));
                    } else {
                        lines.push(format!("{pad}{key}:"));
                        outline(val, indent + 1, lines);
                    }
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for item in arr {
                    if is_leaf(item) {
                        lines.push(format!("{pad}- {}", colorize(item)));
                    } else {
                        lines.push(format!("{pad}-"));
                        outline(item, indent + 1, lines);
                    }
                }
            }
            leaf => lines.push(format!("{pad}{}", colorize(leaf))),
        }
    }

    fn colorize(value: &Value) -> String {
        let plain = text::scalar_text(value);
        match value {
            Value::Null => plain.dimmed().to_string(),
            Value::Bool(_) => plain.yellow().to_string(),
            Value::Number(_) => plain.cyan().to_string(),
            Value::String(_) => plain.green().to_string(),
            Value::Object(_) | Value::Array(_) => plain,
        }
    }
}
