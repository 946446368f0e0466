//! `kit-typegen` binary.
//!
//! Generates TypeScript declarations for file-based routes.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate .svelte-kit/types from a manifest
//! kit-typegen sync --manifest .svelte-kit/manifest.json
//!
//! # Show how routes are classified
//! kit-typegen --format text inspect --manifest .svelte-kit/manifest.json
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use kit_typegen_cli::cli::{Cli, Commands};
use kit_typegen_cli::commands;
use kit_typegen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format).unwrap_or_else(|err| {
        eprintln!("Error: {err:#}");
        commands::exit_code_for(&err)
    });

    std::process::exit(exit_code.as_i32());
}

/// Installs the stderr subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` applies, falling back
/// to `info`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes commands to their handlers.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Sync {
            config,
            manifest,
            root,
            out_dir,
        } => commands::sync::run(config.as_deref(), &manifest, root, out_dir, output_format),
        Commands::Inspect { config, manifest } => {
            commands::inspect::run(config.as_deref(), &manifest, output_format)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
