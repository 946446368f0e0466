//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Route type generator.
///
/// Reads a route manifest and writes `RequestHandler` / `Load` declarations
/// and a typed fetch map under `<out_dir>/types`.
#[derive(Parser, Debug)]
#[command(name = "kit-typegen")]
#[command(version, about, long_about = None)]
#[command(author = "Kit Typegen Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate all declaration files.
    ///
    /// Removes `<out_dir>/types`, then writes `fetch.d.ts` followed by one
    /// declaration per route key.
    ///
    /// # Examples
    ///
    /// ```bash
    /// kit-typegen sync --manifest .svelte-kit/manifest.json
    ///
    /// # With a configuration file and a different output directory
    /// kit-typegen sync --config typegen.toml --manifest manifest.json --out-dir build/kit
    /// ```
    Sync {
        /// Configuration file (TOML, or JSON by `.json` extension)
        #[arg(short, long, env = "KIT_TYPEGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Route manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Project root, overrides the configuration
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output directory, overrides the configuration
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Show how routes are classified, without writing anything.
    ///
    /// # Examples
    ///
    /// ```bash
    /// kit-typegen --format json inspect --manifest manifest.json
    /// ```
    Inspect {
        /// Configuration file (TOML, or JSON by `.json` extension)
        #[arg(short, long, env = "KIT_TYPEGEN_CONFIG")]
        config: Option<PathBuf>,

        /// Route manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// kit-typegen completions bash > /etc/bash_completion.d/kit-typegen
    /// kit-typegen completions zsh > ~/.zfunc/_kit-typegen
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
