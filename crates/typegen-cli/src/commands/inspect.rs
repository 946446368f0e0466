//! Inspect command implementation.
//!
//! Classifies a manifest and prints one row per route key: its kind, its
//! parameters and the declaration file it would get. Nothing is written.

use super::common::{load_config, load_manifest};
use anyhow::{Context, Result};
use kit_typegen_codegen::route_types::output_path;
use kit_typegen_codegen::{ShadowKind, ShadowTypes};
use kit_typegen_core::cli::{ExitCode, OutputFormat};
use kit_typegen_core::{ManifestData, TypegenConfig};
use serde::Serialize;
use std::path::Path;

/// One classified route key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteKeyInfo {
    /// File path with its extension stripped
    pub key: String,
    /// Which declarations the key gets
    pub kind: ShadowKind,
    /// Dynamic parameter names, in path order
    pub params: Vec<String>,
    /// Declaration path relative to the types directory
    pub output: String,
}

/// Classification of a whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// Directory `sync` would write to
    pub types_dir: String,
    /// Route ids of the endpoints in the fetch map
    pub endpoints: Vec<String>,
    /// Route keys in write order
    pub routes: Vec<RouteKeyInfo>,
}

/// Builds the classification report for a manifest.
///
/// # Errors
///
/// Returns an error if a route module or component has no recognised
/// extension or a key holds a malformed parameter.
pub fn inspect(
    config: &TypegenConfig,
    manifest: &ManifestData,
) -> kit_typegen_core::Result<InspectReport> {
    let types = ShadowTypes::from_manifest(config, manifest)?;

    let routes = types
        .iter()
        .map(|(key, entry)| RouteKeyInfo {
            key: key.to_string(),
            kind: entry.kind,
            params: entry.params.clone(),
            output: output_path(key),
        })
        .collect();

    Ok(InspectReport {
        types_dir: config.types_dir().display().to_string(),
        endpoints: manifest.endpoints().map(|r| format!("/{}", r.id)).collect(),
        routes,
    })
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the configuration or manifest cannot be loaded, or
/// classification fails.
pub fn run(
    config_path: Option<&Path>,
    manifest_path: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config =
        load_config(config_path, None, None).context("failed to load configuration")?;

    let manifest = load_manifest(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let report = inspect(&config, &manifest).context("failed to classify routes")?;

    let formatted = crate::formatters::format_output(&report, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
