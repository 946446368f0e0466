//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use kit_typegen_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use kit_typegen_cli::commands::completions;
///
/// let mut cmd = Command::new("kit-typegen");
/// let mut script = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut cmd, &mut script);
/// assert!(!script.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {} completions", shell);
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for symmetry with the other
/// commands.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut out = Vec::new();
        generate_completions(shell, &mut cmd, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("kit-typegen"));
        assert!(script.contains("sync"));
        assert!(script.contains("inspect"));
    }

    #[test]
    fn test_zsh_completions() {
        assert!(script(Shell::Zsh).contains("kit-typegen"));
    }

    #[test]
    fn test_fish_completions() {
        assert!(!script(Shell::Fish).is_empty());
    }

    #[test]
    fn test_powershell_completions() {
        assert!(!script(Shell::PowerShell).is_empty());
    }
}
