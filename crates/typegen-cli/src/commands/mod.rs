//! Command implementations for the `kit-typegen` CLI.
//!
//! Each command module loads its inputs, runs the operation, and prints its
//! report in the requested output format.

pub mod common;
pub mod completions;
pub mod inspect;
pub mod sync;

use kit_typegen_core::cli::ExitCode;

/// Maps a failed command to its process exit code.
///
/// Unreadable or invalid configuration and manifest files are
/// [`ExitCode::INVALID_INPUT`]; everything else is [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use kit_typegen_cli::commands::exit_code_for;
/// use kit_typegen_core::cli::ExitCode;
/// use kit_typegen_core::Error;
///
/// let err = anyhow::Error::new(Error::ConfigError {
///     message: "out_dir cannot be empty".to_string(),
/// })
/// .context("failed to load configuration");
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
/// ```
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<kit_typegen_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
